//! `rust-data-filters` is a small library of pure filters over in-memory data trees, for use
//! inside configuration-templating pipelines.
//!
//! Inputs are [`types::Value`]s: scalars, [`types::Sequence`]s and [`types::Record`]s. Every
//! filter borrows its input and returns a freshly built value; nothing is mutated in place and
//! nothing touches the disk or the network.
//!
//! ## What you can do
//!
//! - Resolve dotted key paths (`"properties.type"`) with [`path::resolve`]
//! - Merge records, overwriting or refusing to ([`processing::merge`])
//! - Select records by value membership, pattern or literal key/value ([`processing::select`])
//! - Sort records by a resolved key ([`processing::sort`])
//! - Flatten, prefix/suffix, pair cyclically, prepend lists, extract trailing digits
//!   ([`processing::sequence`])
//! - Offset IP addresses ([`processing::network`])
//! - Call any of the above by name through a [`registry::FilterRegistry`]
//!
//! Absence is not an error: resolving a missing key yields `None`. Shape problems are reported
//! as [`FilterError`].
//!
//! ## Quick example
//!
//! ```rust
//! use rust_data_filters::path::resolve;
//! use rust_data_filters::processing::dict_nonoverwriting_merge;
//! use rust_data_filters::{FilterError, Value};
//! use serde_json::json;
//!
//! let doc = Value::from(json!({"a.b": 9, "a": {"b": 5}}));
//! // A literal dotted key wins over traversal.
//! assert_eq!(resolve(&doc, "a.b"), Some(&Value::Int64(9)));
//!
//! let base = doc.as_record().unwrap();
//! let extra = Value::from(json!({"a": 1}));
//! let err = dict_nonoverwriting_merge(base, [extra.as_record().unwrap()]).unwrap_err();
//! assert!(matches!(err, FilterError::KeyConflict { .. }));
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the value model
//! - [`path`]: dotted key-path resolution
//! - [`processing`]: the filters
//! - [`registry`]: name-based dispatch with observer hooks
//! - [`ingestion`]: loading filter inputs from JSON / NDJSON
//! - [`error`]: error types used across the crate

pub mod error;
pub mod ingestion;
pub mod path;
pub mod processing;
pub mod registry;
pub mod types;

pub use error::{FilterError, FilterResult};
pub use types::{Record, Sequence, Value};

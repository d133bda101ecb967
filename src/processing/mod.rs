//! Pure filter operations over [`crate::types::Value`] trees.
//!
//! Every function here is synchronous and side-effect free: inputs are borrowed and never
//! modified, outputs are freshly built.
//!
//! - [`merge`]: record merging, overwriting or not
//! - [`select`]: picking records out of a sequence by resolved key
//! - [`sort`]: ordering records by resolved key
//! - [`sequence`]: flatten, prefix/suffix, cyclic pairing, list merge, trailing digits
//! - [`network`]: IP address offsets
//!
//! ## Example: select → sort → prefix
//!
//! ```rust
//! use rust_data_filters::processing::{map_prefix, select_by_membership, sort_by_key, MembershipOptions};
//! use rust_data_filters::Value;
//! use serde_json::json;
//!
//! let hosts = match Value::from(json!([
//!     {"name": "web2", "properties": {"type": "web", "rank": 2}},
//!     {"name": "db1", "properties": {"type": "db", "rank": 1}},
//!     {"name": "web1", "properties": {"type": "web", "rank": 1}},
//! ])) {
//!     Value::Sequence(s) => s,
//!     _ => unreachable!(),
//! };
//!
//! let web = select_by_membership(
//!     &hosts,
//!     "properties.type",
//!     &[Value::from("web")],
//!     MembershipOptions::default(),
//! )?;
//! let web = sort_by_key(&web, "properties.rank")?;
//! let names: Vec<Value> = web.iter().map(|h| h.as_record().unwrap()["name"].clone()).collect();
//!
//! assert_eq!(
//!     map_prefix(&names, "host-")?,
//!     vec![Value::from("host-web1"), Value::from("host-web2")]
//! );
//! # Ok::<(), rust_data_filters::FilterError>(())
//! ```

pub mod merge;
pub mod network;
pub mod select;
pub mod sequence;
pub mod sort;

pub use merge::{dict_merge, dict_nonoverwriting_merge, merge_values, nonoverwriting_merge_values};
pub use network::ip_offset;
pub use select::{
    filter_matches_in_list, select_by_membership, select_by_pattern, select_keyval,
    MembershipOptions, PatternOptions,
};
pub use sequence::{
    distribute_over, flatten, is_subset, list_merge, map_prefix, map_suffix, tags_to_string,
    trailing_digits,
};
pub use sort::sort_by_key;

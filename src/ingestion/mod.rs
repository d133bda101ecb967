//! Loading filter inputs from outside the process.
//!
//! Filters themselves never touch the disk; callers (tests, tools, host engines) use
//! [`json`] to turn documents into [`crate::types::Value`] trees first.

pub mod json;

pub use json::{parse_value_from_str, read_value_from_path};

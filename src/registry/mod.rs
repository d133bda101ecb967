//! Named filter table for host templating engines.
//!
//! A host engine looks filters up by name and calls them with an input value plus positional
//! and keyword arguments. [`FilterRegistry::with_builtin_filters`] registers every filter in
//! [`crate::processing`] under its conventional name:
//!
//! | name | operation |
//! |------|-----------|
//! | `dict_merge` | [`crate::processing::dict_merge`] |
//! | `dict_nonoverwriting_merge` | [`crate::processing::dict_nonoverwriting_merge`] |
//! | `select_dicts_for_key_with_value_in_list` | [`crate::processing::select_by_membership`] (`inverted=` keyword) |
//! | `select_dicts_for_key_with_value_not_in_list` | same, inverted |
//! | `select_dicts_for_key_matching` | [`crate::processing::select_by_pattern`] (`reverse=`, `ignorecase=`) |
//! | `select_keyval` | [`crate::processing::select_keyval`] (`key=`, `value=`) |
//! | `filter_matches_in_list` | [`crate::processing::filter_matches_in_list`] |
//! | `sort_dicts_by_key` | [`crate::processing::sort_by_key`] |
//! | `flatten_list` | [`crate::processing::flatten`] |
//! | `map_prefix` / `map_suffix` | [`crate::processing::map_prefix`] / [`crate::processing::map_suffix`] |
//! | `distribute_over` | [`crate::processing::distribute_over`] (pairs as two-element sequences) |
//! | `list_merge` | [`crate::processing::list_merge`] |
//! | `get_ending_digits` | [`crate::processing::trailing_digits`] |
//! | `is_subset` | [`crate::processing::is_subset`] |
//! | `tags_dict_to_string` | [`crate::processing::tags_to_string`] |
//! | `ip_offset` | [`crate::processing::ip_offset`] |
//!
//! ```rust
//! use rust_data_filters::registry::{FilterArgs, FilterRegistry, RegistryOptions};
//! use rust_data_filters::Value;
//!
//! let registry = FilterRegistry::with_builtin_filters(RegistryOptions::default());
//! let out = registry.apply(
//!     "map_suffix",
//!     &Value::Sequence(vec![Value::from("web1"), Value::from("web2")]),
//!     &FilterArgs::new(vec![Value::from(".example.com")]),
//! )?;
//! assert_eq!(out.as_sequence().unwrap()[0], Value::from("web1.example.com"));
//! # Ok::<(), rust_data_filters::FilterError>(())
//! ```

mod builtin;
pub mod observability;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{FilterError, FilterResult};
use crate::types::{Record, Value};

pub use observability::{
    CompositeObserver, FilterContext, FilterObserver, FilterSeverity, FilterStats, TracingObserver,
};

/// Signature every registered filter has.
pub type FilterFn = fn(&Value, &FilterArgs) -> FilterResult<Value>;

/// Arguments passed to a filter after its input value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// Positional arguments, in call order.
    pub positional: Vec<Value>,
    /// Keyword arguments (flags such as `inverted` or `reverse`).
    pub keyword: Record,
}

impl FilterArgs {
    /// Create arguments from positional values.
    pub fn new(positional: Vec<Value>) -> Self {
        Self {
            positional,
            keyword: Record::new(),
        }
    }

    /// Add a keyword argument.
    pub fn with_keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    /// Positional argument at `index`.
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Keyword argument `name`.
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }

    /// Boolean keyword flag; absent or non-boolean counts as `false`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.keyword(name), Some(Value::Bool(true)))
    }
}

/// Options controlling registry behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct RegistryOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn FilterObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: FilterSeverity,
}

impl fmt::Debug for RegistryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: FilterSeverity::Critical,
        }
    }
}

/// A table of filters addressable by name.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    filters: BTreeMap<String, FilterFn>,
    options: RegistryOptions,
}

impl FilterRegistry {
    /// An empty registry.
    pub fn new(options: RegistryOptions) -> Self {
        Self {
            filters: BTreeMap::new(),
            options,
        }
    }

    /// A registry holding every built-in filter.
    pub fn with_builtin_filters(options: RegistryOptions) -> Self {
        let mut registry = Self::new(options);
        for (name, filter) in builtin::BUILTIN_FILTERS {
            registry.register(*name, *filter);
        }
        registry
    }

    /// Register `filter` under `name`, returning the filter it replaced, if any.
    pub fn register(&mut self, name: impl Into<String>, filter: FilterFn) -> Option<FilterFn> {
        self.filters.insert(name.into(), filter)
    }

    /// Whether a filter is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    /// Invoke the filter registered under `name`.
    ///
    /// When an observer is configured, this reports:
    ///
    /// - `on_success` on success, with item counts
    /// - `on_failure` on failure, with a computed severity
    /// - `on_alert` on failure when the severity is >= `alert_at_or_above`
    pub fn apply(&self, name: &str, input: &Value, args: &FilterArgs) -> FilterResult<Value> {
        tracing::debug!(filter = name, input = input.type_name(), "applying filter");

        let result = match self.filters.get(name) {
            Some(filter) => filter(input, args),
            None => Err(FilterError::UnknownFilter {
                name: name.to_string(),
            }),
        };

        if let Err(e) = &result {
            tracing::warn!(filter = name, error = %e, "filter returned an error");
        }

        if let Some(obs) = self.options.observer.as_ref() {
            let ctx = FilterContext {
                filter: name.to_string(),
            };
            match &result {
                Ok(out) => obs.on_success(&ctx, FilterStats::between(input, out)),
                Err(e) => {
                    let sev = FilterSeverity::of(e);
                    obs.on_failure(&ctx, sev, e);
                    if sev >= self.options.alert_at_or_above {
                        obs.on_alert(&ctx, sev, e);
                    }
                }
            }
        }

        result
    }
}

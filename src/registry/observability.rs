use std::fmt;
use std::sync::Arc;

use crate::error::FilterError;
use crate::types::Value;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FilterSeverity {
    /// The filter rejected its input or arguments.
    Error,
    /// The call could not be dispatched at all (unknown filter, I/O).
    Critical,
}

impl FilterSeverity {
    /// Classify a filter error.
    pub fn of(error: &FilterError) -> Self {
        match error {
            FilterError::UnknownFilter { .. } | FilterError::Io(_) => FilterSeverity::Critical,
            _ => FilterSeverity::Error,
        }
    }
}

/// Context about a filter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterContext {
    /// Registered name the filter was invoked under.
    pub filter: String,
}

/// Minimal stats reported on a successful invocation.
///
/// Counts are sequence lengths or record sizes; a scalar counts as one item and `null` as none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    /// Items in the filter input.
    pub input_items: usize,
    /// Items in the filter output.
    pub output_items: usize,
}

impl FilterStats {
    pub(crate) fn between(input: &Value, output: &Value) -> Self {
        Self {
            input_items: item_count(input),
            output_items: item_count(output),
        }
    }
}

fn item_count(v: &Value) -> usize {
    match v {
        Value::Null => 0,
        Value::Sequence(s) => s.len(),
        Value::Record(r) => r.len(),
        _ => 1,
    }
}

/// Observer interface for filter invocations.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait FilterObserver: Send + Sync {
    /// Called when a filter succeeds.
    fn on_success(&self, _ctx: &FilterContext, _stats: FilterStats) {}

    /// Called when a filter fails.
    fn on_failure(&self, _ctx: &FilterContext, _severity: FilterSeverity, _error: &FilterError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &FilterContext, severity: FilterSeverity, error: &FilterError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn FilterObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn FilterObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl FilterObserver for CompositeObserver {
    fn on_success(&self, ctx: &FilterContext, stats: FilterStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &FilterContext, severity: FilterSeverity, error: &FilterError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &FilterContext, severity: FilterSeverity, error: &FilterError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Forwards filter events to `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl FilterObserver for TracingObserver {
    fn on_success(&self, ctx: &FilterContext, stats: FilterStats) {
        tracing::debug!(
            filter = %ctx.filter,
            input_items = stats.input_items,
            output_items = stats.output_items,
            "filter ok"
        );
    }

    fn on_failure(&self, ctx: &FilterContext, severity: FilterSeverity, error: &FilterError) {
        tracing::warn!(filter = %ctx.filter, ?severity, %error, "filter failed");
    }

    fn on_alert(&self, ctx: &FilterContext, severity: FilterSeverity, error: &FilterError) {
        tracing::error!(filter = %ctx.filter, ?severity, %error, "filter alert");
    }
}

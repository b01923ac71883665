//! Observability: in-process counters and the sink boundary that feeds them.
//!
//! Comparator and translation code only ever emits `MetricsEvent`s through
//! `sink::record`; nothing outside this module touches counter state.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport, EventState, EventSummary};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};

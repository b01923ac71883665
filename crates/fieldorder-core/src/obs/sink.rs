//! Metrics sink boundary.
//!
//! Comparator logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::{
    compare::OpaqueReason,
    model::field::FieldKind,
    obs::metrics::{self, EventState},
};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    FieldLinkAppended { kind: FieldKind },
    OpaqueLinkAppended { reason: OpaqueReason },
    Translated { fields: u64 },
    TranslateRejected,
    Sorted { rows: u64, bounded: bool },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the process-wide counter state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| apply(m, event));
    }
}

// Fold one event into a counter snapshot.
fn apply(m: &mut EventState, event: MetricsEvent) {
    match event {
        MetricsEvent::FieldLinkAppended { kind } => {
            m.ops.field_links = m.ops.field_links.saturating_add(1);
            metrics::bump(&mut m.link_kinds, kind.to_string());
        }

        MetricsEvent::OpaqueLinkAppended { reason } => {
            m.ops.opaque_links = m.ops.opaque_links.saturating_add(1);
            metrics::bump(&mut m.opaque_reasons, reason.to_string());
        }

        MetricsEvent::Translated { fields } => {
            m.ops.translations = m.ops.translations.saturating_add(1);
            m.ops.translated_fields = m.ops.translated_fields.saturating_add(fields);
        }

        MetricsEvent::TranslateRejected => {
            m.ops.translation_rejections = m.ops.translation_rejections.saturating_add(1);
        }

        MetricsEvent::Sorted { rows, bounded } => {
            if bounded {
                m.ops.bounded_sorts = m.ops.bounded_sorts.saturating_add(1);
            } else {
                m.ops.sorts = m.ops.sorts.saturating_add(1);
            }
            m.ops.rows_sorted = m.ops.rows_sorted.saturating_add(rows);
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    // Clone out of the slot so a sink that records again does not hit an
    // outstanding borrow.
    let override_sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match override_sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the process-wide counters.
///
/// Events recorded on any thread are included, except those captured by a
/// scoped override sink.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset the process-wide counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override on this thread.
///
/// The previous sink is restored on every exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let previous = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = previous;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    sync::{LazyLock, Mutex, PoisonError},
};

///
/// EventState
/// Ephemeral, in-memory counters for comparator construction and sorting.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    /// Typed links appended, keyed by field kind.
    pub link_kinds: BTreeMap<String, u64>,
    /// Opaque links appended, keyed by degradation reason.
    pub opaque_reasons: BTreeMap<String, u64>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Chain construction
    pub field_links: u64,
    pub opaque_links: u64,

    // ORDER BY translation
    pub translations: u64,
    pub translated_fields: u64,
    pub translation_rejections: u64,

    // Sort helpers
    pub sorts: u64,
    pub bounded_sorts: u64,
    pub rows_sorted: u64,
}

///
/// EventSummary
/// Derived ratios over the raw counters.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventSummary {
    pub avg_rows_per_sort: f64,
    pub opaque_link_share: f64,
}

///
/// EventReport
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventReport {
    pub counters: EventState,
    pub summary: EventSummary,
}

/// Process-wide counters, shared by every thread that sorts or builds chains.
static EVENT_STATE: LazyLock<Mutex<EventState>> =
    LazyLock::new(|| Mutex::new(EventState::default()));

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    let state = EVENT_STATE.lock().unwrap_or_else(PoisonError::into_inner);
    f(&state)
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    let mut state = EVENT_STATE.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut state)
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

/// Increment one keyed counter.
pub(crate) fn bump(map: &mut BTreeMap<String, u64>, key: String) {
    let entry = map.entry(key).or_default();
    *entry = entry.saturating_add(1);
}

/// Build a report by inspecting in-memory counters only.
#[must_use]
pub(crate) fn report() -> EventReport {
    EventReport::from_state(with_state(Clone::clone))
}

impl EventReport {
    /// Derive the summary ratios for a counter snapshot.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_state(counters: EventState) -> Self {
        let ops = &counters.ops;

        let total_sorts = ops.sorts.saturating_add(ops.bounded_sorts);
        let avg_rows_per_sort = if total_sorts > 0 {
            ops.rows_sorted as f64 / total_sorts as f64
        } else {
            0.0
        };

        let total_links = ops.field_links.saturating_add(ops.opaque_links);
        let opaque_link_share = if total_links > 0 {
            ops.opaque_links as f64 / total_links as f64
        } else {
            0.0
        };

        Self {
            summary: EventSummary {
                avg_rows_per_sort,
                opaque_link_share,
            },
            counters,
        }
    }
}

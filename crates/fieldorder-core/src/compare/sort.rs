use crate::{
    compare::CombinedComparator,
    obs::sink::{MetricsEvent, record},
};
use std::cmp::Ordering;

// Sort helpers over a combined comparator. Every entry point reports one
// `Sorted` event so hosts can see how much ordering work a chain performs.
impl<E> CombinedComparator<E> {
    /// Stable sort of `rows` under this ordering.
    pub fn sort(&self, rows: &mut [E]) {
        record_sorted(rows.len(), false);
        rows.sort_by(|left, right| self.compare(left, right));
    }

    /// Stable sort of row wrappers by the entity each one carries.
    pub fn sort_by_key_of<R, F>(&self, rows: &mut [R], entity_of: F)
    where
        F: Fn(&R) -> &E,
    {
        record_sorted(rows.len(), false);
        rows.sort_by(|left, right| self.compare(entity_of(left), entity_of(right)));
    }

    /// Keep only the first `keep` rows of the ordering, sorted.
    ///
    /// Partitions around the last kept position before sorting, so only the
    /// retained prefix pays for a full sort. Among rows tied at the cutoff,
    /// which ones survive is unspecified.
    pub fn sort_bounded(&self, rows: &mut Vec<E>, keep: usize) {
        record_sorted(rows.len(), true);

        if keep == 0 {
            rows.clear();
            return;
        }

        if rows.len() > keep {
            rows.select_nth_unstable_by(keep - 1, |left, right| self.compare(left, right));
            rows.truncate(keep);
        }

        rows.sort_by(|left, right| self.compare(left, right));
    }

    /// True when no adjacent pair of `rows` is out of order.
    #[must_use]
    pub fn is_sorted(&self, rows: &[E]) -> bool {
        rows.is_sorted_by(|left, right| self.compare(left, right) != Ordering::Greater)
    }

    /// Smallest row; the first one wins among equals.
    #[must_use]
    pub fn min<'a>(&self, rows: &'a [E]) -> Option<&'a E> {
        rows.iter().min_by(|left, right| self.compare(left, right))
    }

    /// Largest row; the last one wins among equals.
    #[must_use]
    pub fn max<'a>(&self, rows: &'a [E]) -> Option<&'a E> {
        rows.iter().max_by(|left, right| self.compare(left, right))
    }
}

fn record_sorted(rows: usize, bounded: bool) {
    record(MetricsEvent::Sorted {
        rows: u64::try_from(rows).unwrap_or(u64::MAX),
        bounded,
    });
}

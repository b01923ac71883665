use crate::value::NullOrder;
use std::cmp::Ordering;

#[inline]
pub(super) fn compare_ord<T: Ord>(left: T, right: T) -> Ordering {
    left.cmp(&right)
}

/// Total order over `f64`.
///
/// Ordering rules:
/// 1. `-0.0` sorts before `0.0`
/// 2. NaN (any payload) equals NaN and sorts after every other value
#[must_use]
pub fn compare_f64(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.total_cmp(&right),
    }
}

/// Total order over `f32`, same rules as [`compare_f64`].
#[must_use]
pub fn compare_f32(left: f32, right: f32) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.total_cmp(&right),
    }
}

/// Null-aware natural comparison.
///
/// Two nulls are equal; a single null is placed by `nulls`; two values use
/// their natural ordering.
#[must_use]
pub fn compare_nullable<V: Ord + ?Sized>(
    left: Option<&V>,
    right: Option<&V>,
    nulls: NullOrder,
) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => nulls.null_vs_value(),
        (Some(_), None) => nulls.null_vs_value().reverse(),
        (Some(left), Some(right)) => left.cmp(right),
    }
}

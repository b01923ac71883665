use crate::{
    model::field::FieldKind,
    value::{NullOrder, Primitive, compare_f32, compare_f64, compare_nullable},
};
use proptest::prelude::*;
use std::cmp::Ordering;

// ---- floats ------------------------------------------------------------

#[test]
fn negative_zero_sorts_before_positive_zero() {
    assert_eq!(compare_f64(-0.0, 0.0), Ordering::Less);
    assert_eq!(compare_f32(0.0, -0.0), Ordering::Greater);
}

#[test]
fn nan_sorts_after_infinity_and_equals_itself() {
    assert_eq!(compare_f64(f64::NAN, f64::INFINITY), Ordering::Greater);
    assert_eq!(compare_f64(f64::NEG_INFINITY, f64::NAN), Ordering::Less);
    assert_eq!(compare_f64(f64::NAN, -f64::NAN), Ordering::Equal);
    assert_eq!(compare_f32(f32::NAN, f32::NAN), Ordering::Equal);
}

// ---- nulls -------------------------------------------------------------

#[test]
fn null_placement_follows_policy() {
    let value = Some("x");

    assert_eq!(compare_nullable::<str>(None, None, NullOrder::First), Ordering::Equal);
    assert_eq!(compare_nullable::<str>(None, None, NullOrder::Last), Ordering::Equal);
    assert_eq!(compare_nullable(None, value, NullOrder::First), Ordering::Less);
    assert_eq!(compare_nullable(None, value, NullOrder::Last), Ordering::Greater);
    assert_eq!(compare_nullable(value, None, NullOrder::First), Ordering::Greater);
    assert_eq!(compare_nullable(value, None, NullOrder::Last), Ordering::Less);
}

#[test]
fn null_order_reversal_is_involutive() {
    assert_eq!(NullOrder::First.reversed(), NullOrder::Last);
    assert_eq!(NullOrder::Last.reversed().reversed(), NullOrder::Last);
    assert_eq!(NullOrder::default(), NullOrder::Last);
}

#[test]
fn null_order_serializes_snake_case() {
    let json = serde_json::to_string(&NullOrder::First).expect("serialize should succeed");
    assert_eq!(json, "\"first\"");
}

// ---- primitive registry -------------------------------------------------

#[test]
fn primitive_kinds_match_widths() {
    assert_eq!(<i8 as Primitive>::KIND, FieldKind::Byte);
    assert_eq!(<i16 as Primitive>::KIND, FieldKind::Short);
    assert_eq!(<i32 as Primitive>::KIND, FieldKind::Int);
    assert_eq!(<i64 as Primitive>::KIND, FieldKind::Long);
    assert_eq!(<f32 as Primitive>::KIND, FieldKind::Float);
    assert_eq!(<f64 as Primitive>::KIND, FieldKind::Double);
    assert_eq!(<char as Primitive>::KIND, FieldKind::Char);
}

proptest! {
    #[test]
    fn f64_order_is_antisymmetric(left in any::<f64>(), right in any::<f64>()) {
        prop_assert_eq!(compare_f64(left, right), compare_f64(right, left).reverse());
    }

    #[test]
    fn f64_order_agrees_with_partial_cmp_on_distinct_numbers(left in -1e9f64..1e9, right in -1e9f64..1e9) {
        prop_assume!(left != right);
        prop_assert_eq!(Some(compare_f64(left, right)), left.partial_cmp(&right));
    }

    #[test]
    fn nullable_order_is_antisymmetric(
        left in proptest::option::of("[a-c]{0,2}"),
        right in proptest::option::of("[a-c]{0,2}"),
        first in any::<bool>(),
    ) {
        let nulls = if first { NullOrder::First } else { NullOrder::Last };
        let forward = compare_nullable(left.as_deref(), right.as_deref(), nulls);
        let backward = compare_nullable(right.as_deref(), left.as_deref(), nulls);
        prop_assert_eq!(forward, backward.reverse());
    }
}

mod compare;

#[cfg(test)]
mod tests;

use crate::{
    accessor::{FieldAccessor, Getter},
    compare::{FieldComparator, PrimitiveComparator},
    model::field::FieldKind,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// re-exports
pub use compare::{compare_f32, compare_f64, compare_nullable};

///
/// NullOrder
///
/// Placement of null reference values relative to every non-null value.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NullOrder {
    First,
    #[default]
    Last,
}

impl NullOrder {
    /// Ordering of a null value against any non-null value.
    #[must_use]
    pub const fn null_vs_value(self) -> Ordering {
        match self {
            Self::First => Ordering::Less,
            Self::Last => Ordering::Greater,
        }
    }

    /// The opposite placement.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::First => Self::Last,
            Self::Last => Self::First,
        }
    }

    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

///
/// Primitive
///
/// Unboxed value types a field accessor can read directly.
/// Each width knows its `FieldKind`, its natural ordering, and which
/// accessor/comparator variant it lands in, so generic code can build the
/// typed variant without matching on `T`.
///

pub trait Primitive: Copy + Send + Sync + sealed::Sealed + 'static {
    const KIND: FieldKind;

    /// Natural ordering for this width.
    fn natural_cmp(left: Self, right: Self) -> Ordering;

    #[doc(hidden)]
    fn wrap_accessor<E>(getter: Getter<E, Self>) -> FieldAccessor<E>;

    #[doc(hidden)]
    fn wrap_comparator<E>(comparator: PrimitiveComparator<E, Self>) -> FieldComparator<E>;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $kind:ident, $cmp:path );* $(;)? ) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const KIND: FieldKind = FieldKind::$kind;

                #[inline]
                fn natural_cmp(left: Self, right: Self) -> Ordering {
                    $cmp(left, right)
                }

                fn wrap_accessor<E>(getter: Getter<E, Self>) -> FieldAccessor<E> {
                    FieldAccessor::$kind(getter)
                }

                fn wrap_comparator<E>(
                    comparator: PrimitiveComparator<E, Self>,
                ) -> FieldComparator<E> {
                    FieldComparator::$kind(comparator)
                }
            }
        )*
    };
}

impl_primitive! {
    i8 => Byte, compare::compare_ord;
    i16 => Short, compare::compare_ord;
    i32 => Int, compare::compare_ord;
    i64 => Long, compare::compare_ord;
    f32 => Float, compare_f32;
    f64 => Double, compare_f64;
    char => Char, compare::compare_ord;
}

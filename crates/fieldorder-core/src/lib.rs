//! Core runtime for fieldorder: field accessors, single-field comparators,
//! the combined multi-key comparator, ORDER BY translation, and the
//! observability surface exported via the `prelude`.
#![warn(unreachable_pub)]

pub mod accessor;
pub mod compare;
pub mod error;
pub mod model;
pub mod obs;
pub mod order;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or metrics helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        accessor::{
            FieldAccessor, GetByte, GetChar, GetDouble, GetFloat, GetInt, GetLong, GetReference,
            GetShort, Getter, KeyExtractor,
        },
        compare::{ChainPolicy, CombinedComparator, FieldComparator, Link},
        model::{entity::EntityModel, field::FieldKind, field::FieldModel},
        order::{OrderDirection, OrderField, OrderSpec},
        value::NullOrder,
    };
}

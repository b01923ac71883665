//! ORDER BY translation.
//!
//! Reads a fully introspectable `CombinedComparator` back as an ordered list
//! of `(field, direction, nulls)` entries, so an ordering built in memory can
//! be handed to a store or query layer that sorts on its own.


use crate::{
    compare::CombinedComparator,
    error::OrderTranslateError,
    model::entity::EntityModel,
    obs::sink::{MetricsEvent, record},
    value::NullOrder,
};
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    #[must_use]
    pub const fn from_reversed(reversed: bool) -> Self {
        if reversed { Self::Desc } else { Self::Asc }
    }

    #[must_use]
    pub const fn is_desc(self) -> bool {
        matches!(self, Self::Desc)
    }

    /// Apply this direction to an ascending ordering.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

///
/// OrderField
///
/// One ORDER BY entry with the chain-level reversal already folded in.
/// `nulls` is where nulls land in the final ordering; `None` for primitive
/// fields, which have no null.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderField {
    pub field: String,
    pub direction: OrderDirection,
    pub nulls: Option<NullOrder>,
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction.as_sql())?;
        if let Some(nulls) = self.nulls {
            write!(f, " {}", nulls.as_sql())?;
        }

        Ok(())
    }
}

///
/// OrderSpec
///
/// Ordered ORDER BY entries, primary key first.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize)]
pub struct OrderSpec {
    #[into_iterator(owned, ref)]
    pub fields: Vec<OrderField>,
}

impl OrderSpec {
    /// Translate a comparator chain against the entity it sorts.
    ///
    /// Fails at the first opaque link, on a field the entity does not
    /// declare, or for an empty chain.
    pub fn from_comparator<E>(
        chain: &CombinedComparator<E>,
        model: &EntityModel,
    ) -> Result<Self, OrderTranslateError> {
        let result = Self::translate(chain, model);

        match &result {
            Ok(spec) => record(MetricsEvent::Translated {
                fields: u64::try_from(spec.fields.len()).unwrap_or(u64::MAX),
            }),
            Err(err) => {
                tracing::debug!(
                    entity = model.entity_name,
                    error = %err,
                    "comparator is not translatable to ORDER BY"
                );
                record(MetricsEvent::TranslateRejected);
            }
        }

        result
    }

    fn translate<E>(
        chain: &CombinedComparator<E>,
        model: &EntityModel,
    ) -> Result<Self, OrderTranslateError> {
        if chain.is_empty() {
            return Err(OrderTranslateError::EmptyOrder);
        }

        let mut fields = Vec::with_capacity(chain.link_count());
        for (position, link) in chain.links().iter().enumerate() {
            let comparator = link
                .as_field()
                .ok_or(OrderTranslateError::OpaqueLink { position })?;

            let field = comparator.field();
            if !model.contains(field) {
                return Err(OrderTranslateError::UnknownField {
                    entity: model.entity_name.to_string(),
                    field: field.qualified_name(),
                });
            }

            // Nulls are placed before a comparator's reversal is applied, so
            // a net descending entry carries the opposite null placement.
            let reversed = comparator.is_reversed() != chain.is_reversed();
            let nulls = comparator
                .null_order()
                .map(|nulls| if reversed { nulls.reversed() } else { nulls });

            fields.push(OrderField {
                field: field.name.to_string(),
                direction: OrderDirection::from_reversed(reversed),
                nulls,
            });
        }

        Ok(Self { fields })
    }

    /// Comma-separated `field DIR [NULLS ...]` list.
    #[must_use]
    pub fn to_order_by_clause(&self) -> String {
        self.fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

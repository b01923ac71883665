use crate::compare::{CombinedComparator, FieldComparator};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, sync::Arc};

pub(crate) type CompareFn<E> = Arc<dyn Fn(&E, &E) -> Ordering + Send + Sync>;

///
/// OpaqueReason
///
/// Why a chain link could not be kept as a typed field comparator.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpaqueReason {
    /// Caller passed an arbitrary comparison function or a whole chain.
    #[display("foreign comparator")]
    ForeignComparator,
    /// Key extractor was not backed by a field accessor.
    #[display("unrecognized extractor")]
    UnrecognizedExtractor,
    /// Caller supplied an explicit key comparator.
    #[display("explicit key comparator")]
    ExplicitKeyComparator,
    /// Chain policy turned specialization off.
    #[display("specialization disabled")]
    SpecializationDisabled,
}

///
/// OpaqueComparator
///
/// Comparison function with no field identity attached.
///

pub struct OpaqueComparator<E> {
    compare: CompareFn<E>,
    reason: OpaqueReason,
}

impl<E> OpaqueComparator<E> {
    pub(crate) fn new(compare: CompareFn<E>, reason: OpaqueReason) -> Self {
        Self { compare, reason }
    }

    #[must_use]
    pub const fn reason(&self) -> OpaqueReason {
        self.reason
    }

    #[inline]
    pub fn compare(&self, left: &E, right: &E) -> Ordering {
        (self.compare)(left, right)
    }
}

impl<E> Clone for OpaqueComparator<E> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
            reason: self.reason,
        }
    }
}

///
/// Link
///
/// One entry of a combined comparator: either a typed, introspectable field
/// comparator or an opaque comparison function.
///

pub enum Link<E> {
    Field(FieldComparator<E>),
    Opaque(OpaqueComparator<E>),
}

impl<E> Link<E> {
    /// Wrap an arbitrary comparison function.
    pub fn opaque<F>(compare: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    {
        Self::Opaque(OpaqueComparator::new(
            Arc::new(compare),
            OpaqueReason::ForeignComparator,
        ))
    }

    #[inline]
    pub fn compare(&self, left: &E, right: &E) -> Ordering {
        match self {
            Self::Field(comparator) => comparator.compare(left, right),
            Self::Opaque(comparator) => comparator.compare(left, right),
        }
    }

    #[must_use]
    pub const fn as_field(&self) -> Option<&FieldComparator<E>> {
        match self {
            Self::Field(comparator) => Some(comparator),
            Self::Opaque(_) => None,
        }
    }

    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }
}

impl<E> From<FieldComparator<E>> for Link<E> {
    fn from(comparator: FieldComparator<E>) -> Self {
        Self::Field(comparator)
    }
}

// A whole chain handed to `then_comparing` is treated like any other
// foreign comparator: its links are not spliced in.
impl<E: 'static> From<CombinedComparator<E>> for Link<E> {
    fn from(chain: CombinedComparator<E>) -> Self {
        Self::Opaque(OpaqueComparator::new(
            Arc::new(move |left: &E, right: &E| chain.compare(left, right)),
            OpaqueReason::ForeignComparator,
        ))
    }
}

impl<E> Clone for Link<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(comparator) => Self::Field(comparator.clone()),
            Self::Opaque(comparator) => Self::Opaque(comparator.clone()),
        }
    }
}

impl<E> fmt::Debug for Link<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(comparator) => f.debug_tuple("Field").field(comparator).finish(),
            Self::Opaque(comparator) => f.debug_tuple("Opaque").field(&comparator.reason).finish(),
        }
    }
}

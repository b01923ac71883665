use crate::{
    accessor::{FieldAccessor, Getter, ReferenceAccessor},
    compare::CombinedComparator,
    model::field::{FieldKind, FieldModel},
    order::OrderDirection,
    value::{NullOrder, Primitive},
};
use std::{cmp::Ordering, fmt};

// Apply a comparator's own reversal flag to one base ordering.
#[inline]
pub(crate) const fn apply_reversal(ordering: Ordering, reversed: bool) -> Ordering {
    if reversed { ordering.reverse() } else { ordering }
}

///
/// PrimitiveComparator
///
/// Single-field comparator over one unboxed primitive field.
///

pub struct PrimitiveComparator<E, T> {
    getter: Getter<E, T>,
    reversed: bool,
}

pub type ByteFieldComparator<E> = PrimitiveComparator<E, i8>;
pub type ShortFieldComparator<E> = PrimitiveComparator<E, i16>;
pub type IntFieldComparator<E> = PrimitiveComparator<E, i32>;
pub type LongFieldComparator<E> = PrimitiveComparator<E, i64>;
pub type FloatFieldComparator<E> = PrimitiveComparator<E, f32>;
pub type DoubleFieldComparator<E> = PrimitiveComparator<E, f64>;
pub type CharFieldComparator<E> = PrimitiveComparator<E, char>;

impl<E, T: Primitive> PrimitiveComparator<E, T> {
    #[must_use]
    pub const fn new(getter: Getter<E, T>, reversed: bool) -> Self {
        Self { getter, reversed }
    }

    #[must_use]
    pub const fn getter(&self) -> &Getter<E, T> {
        &self.getter
    }

    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Same field, opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            getter: self.getter,
            reversed: !self.reversed,
        }
    }

    #[inline]
    pub fn compare(&self, left: &E, right: &E) -> Ordering {
        let ordering = T::natural_cmp(self.getter.get(left), self.getter.get(right));

        apply_reversal(ordering, self.reversed)
    }
}

impl<E, T> Clone for PrimitiveComparator<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for PrimitiveComparator<E, T> {}

impl<E, T: Primitive> From<PrimitiveComparator<E, T>> for FieldComparator<E> {
    fn from(comparator: PrimitiveComparator<E, T>) -> Self {
        T::wrap_comparator(comparator)
    }
}

///
/// ReferenceComparator
///
/// Single-field comparator over one nullable reference field.
/// Null placement is decided before the reversal flag is applied, so a
/// reversed comparator also moves its nulls to the other end.
///

pub struct ReferenceComparator<E> {
    accessor: ReferenceAccessor<E>,
    nulls: NullOrder,
    reversed: bool,
}

impl<E> ReferenceComparator<E> {
    #[must_use]
    pub const fn new(accessor: ReferenceAccessor<E>, nulls: NullOrder, reversed: bool) -> Self {
        Self {
            accessor,
            nulls,
            reversed,
        }
    }

    #[must_use]
    pub const fn accessor(&self) -> &ReferenceAccessor<E> {
        &self.accessor
    }

    #[must_use]
    pub const fn null_order(&self) -> NullOrder {
        self.nulls
    }

    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Same field and null policy, opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            nulls: self.nulls,
            reversed: !self.reversed,
        }
    }

    #[inline]
    pub fn compare(&self, left: &E, right: &E) -> Ordering {
        let ordering = self.accessor.compare(left, right, self.nulls);

        apply_reversal(ordering, self.reversed)
    }
}

impl<E> Clone for ReferenceComparator<E> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            nulls: self.nulls,
            reversed: self.reversed,
        }
    }
}

impl<E> From<ReferenceComparator<E>> for FieldComparator<E> {
    fn from(comparator: ReferenceComparator<E>) -> Self {
        Self::Reference(comparator)
    }
}

///
/// FieldComparator
///
/// Ordering rule over exactly one field: the field, its direction, and for
/// reference fields the null policy. Every variant stays identifiable after
/// it is composed into a chain.
///

pub enum FieldComparator<E> {
    Byte(ByteFieldComparator<E>),
    Short(ShortFieldComparator<E>),
    Int(IntFieldComparator<E>),
    Long(LongFieldComparator<E>),
    Float(FloatFieldComparator<E>),
    Double(DoubleFieldComparator<E>),
    Char(CharFieldComparator<E>),
    Reference(ReferenceComparator<E>),
}

// Expand `$body` once per primitive variant with `$c` bound to the inner
// comparator; the reference arm is supplied separately.
macro_rules! match_primitive {
    ($value:expr, $c:ident => $body:expr, $r:ident => $reference:expr) => {
        match $value {
            FieldComparator::Byte($c) => $body,
            FieldComparator::Short($c) => $body,
            FieldComparator::Int($c) => $body,
            FieldComparator::Long($c) => $body,
            FieldComparator::Float($c) => $body,
            FieldComparator::Double($c) => $body,
            FieldComparator::Char($c) => $body,
            FieldComparator::Reference($r) => $reference,
        }
    };
}

impl<E> FieldComparator<E> {
    /// Build the typed comparator matching an accessor's kind.
    ///
    /// `reference_nulls` is only consulted for reference accessors.
    #[must_use]
    pub fn from_accessor(
        accessor: FieldAccessor<E>,
        reversed: bool,
        reference_nulls: NullOrder,
    ) -> Self {
        match accessor {
            FieldAccessor::Byte(getter) => Self::Byte(PrimitiveComparator::new(getter, reversed)),
            FieldAccessor::Short(getter) => Self::Short(PrimitiveComparator::new(getter, reversed)),
            FieldAccessor::Int(getter) => Self::Int(PrimitiveComparator::new(getter, reversed)),
            FieldAccessor::Long(getter) => Self::Long(PrimitiveComparator::new(getter, reversed)),
            FieldAccessor::Float(getter) => Self::Float(PrimitiveComparator::new(getter, reversed)),
            FieldAccessor::Double(getter) => {
                Self::Double(PrimitiveComparator::new(getter, reversed))
            }
            FieldAccessor::Char(getter) => Self::Char(PrimitiveComparator::new(getter, reversed)),
            FieldAccessor::Reference(accessor) => {
                Self::Reference(ReferenceComparator::new(accessor, reference_nulls, reversed))
            }
        }
    }

    /// Ascending comparator; reference fields sort nulls last.
    #[must_use]
    pub fn ascending(accessor: impl Into<FieldAccessor<E>>) -> Self {
        Self::from_accessor(accessor.into(), false, NullOrder::Last)
    }

    /// Descending comparator; reference fields sort nulls last before reversal.
    #[must_use]
    pub fn descending(accessor: impl Into<FieldAccessor<E>>) -> Self {
        Self::from_accessor(accessor.into(), true, NullOrder::Last)
    }

    /// Replace the null policy. No effect on primitive comparators.
    #[must_use]
    pub fn with_null_order(self, nulls: NullOrder) -> Self {
        match self {
            Self::Reference(c) => Self::Reference(ReferenceComparator::new(
                c.accessor,
                nulls,
                c.reversed,
            )),
            other => other,
        }
    }

    #[inline]
    pub fn compare(&self, left: &E, right: &E) -> Ordering {
        match_primitive!(self, c => c.compare(left, right), r => r.compare(left, right))
    }

    /// Same field and policy, opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::Byte(c) => Self::Byte(c.reversed()),
            Self::Short(c) => Self::Short(c.reversed()),
            Self::Int(c) => Self::Int(c.reversed()),
            Self::Long(c) => Self::Long(c.reversed()),
            Self::Float(c) => Self::Float(c.reversed()),
            Self::Double(c) => Self::Double(c.reversed()),
            Self::Char(c) => Self::Char(c.reversed()),
            Self::Reference(c) => Self::Reference(c.reversed()),
        }
    }

    #[must_use]
    pub fn field(&self) -> &'static FieldModel {
        match_primitive!(self, c => c.getter().field(), r => r.accessor().field())
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Byte(_) => FieldKind::Byte,
            Self::Short(_) => FieldKind::Short,
            Self::Int(_) => FieldKind::Int,
            Self::Long(_) => FieldKind::Long,
            Self::Float(_) => FieldKind::Float,
            Self::Double(_) => FieldKind::Double,
            Self::Char(_) => FieldKind::Char,
            Self::Reference(_) => FieldKind::Reference,
        }
    }

    #[must_use]
    pub fn is_reversed(&self) -> bool {
        match_primitive!(self, c => c.is_reversed(), r => r.is_reversed())
    }

    /// Stored direction of this comparator.
    #[must_use]
    pub fn direction(&self) -> OrderDirection {
        OrderDirection::from_reversed(self.is_reversed())
    }

    /// Null policy for reference comparators; `None` for primitives.
    #[must_use]
    pub const fn null_order(&self) -> Option<NullOrder> {
        match self {
            Self::Reference(c) => Some(c.null_order()),
            _ => None,
        }
    }

    /// Start a chain with this comparator as primary key.
    #[must_use]
    pub fn into_chain(self) -> CombinedComparator<E> {
        CombinedComparator::new([self])
    }
}

impl<E> Clone for FieldComparator<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Byte(c) => Self::Byte(*c),
            Self::Short(c) => Self::Short(*c),
            Self::Int(c) => Self::Int(*c),
            Self::Long(c) => Self::Long(*c),
            Self::Float(c) => Self::Float(*c),
            Self::Double(c) => Self::Double(*c),
            Self::Char(c) => Self::Char(*c),
            Self::Reference(c) => Self::Reference(c.clone()),
        }
    }
}

impl<E> fmt::Debug for FieldComparator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("FieldComparator");
        out.field("field", &self.field().qualified_name())
            .field("kind", &self.kind())
            .field("direction", &self.direction());
        if let Some(nulls) = self.null_order() {
            out.field("nulls", &nulls);
        }

        out.finish()
    }
}

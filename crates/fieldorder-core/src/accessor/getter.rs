use crate::{
    compare::{FieldComparator, PrimitiveComparator},
    model::field::{FieldKind, FieldModel},
    value::Primitive,
};
use std::fmt;

///
/// Getter
///
/// Typed, read-only accessor for one primitive field.
/// Holds a plain function pointer so reads are never boxed.
///

pub struct Getter<E, T> {
    field: &'static FieldModel,
    get: fn(&E) -> T,
}

pub type GetByte<E> = Getter<E, i8>;
pub type GetShort<E> = Getter<E, i16>;
pub type GetInt<E> = Getter<E, i32>;
pub type GetLong<E> = Getter<E, i64>;
pub type GetFloat<E> = Getter<E, f32>;
pub type GetDouble<E> = Getter<E, f64>;
pub type GetChar<E> = Getter<E, char>;

impl<E, T: Primitive> Getter<E, T> {
    #[must_use]
    pub const fn new(field: &'static FieldModel, get: fn(&E) -> T) -> Self {
        Self { field, get }
    }

    #[must_use]
    pub const fn field(&self) -> &'static FieldModel {
        self.field
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        T::KIND
    }

    /// Read the field from one entity.
    #[inline]
    pub fn get(&self, entity: &E) -> T {
        (self.get)(entity)
    }

    /// Ascending comparator over this field.
    #[must_use]
    pub fn comparator(self) -> FieldComparator<E> {
        T::wrap_comparator(PrimitiveComparator::new(self, false))
    }
}

impl<E, T> Clone for Getter<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for Getter<E, T> {}

impl<E, T> fmt::Debug for Getter<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Getter")
            .field("field", &self.field.qualified_name())
            .field("kind", &self.field.kind)
            .finish_non_exhaustive()
    }
}

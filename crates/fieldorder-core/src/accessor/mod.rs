//! Field accessor capabilities.
//!
//! An accessor identifies one field of an entity and reads its value.
//! `FieldAccessor` is the closed sum over every accessor kind; chain
//! extension matches on it to decide whether a key can be compared through a
//! typed, introspectable field comparator.

mod getter;
mod key;
mod reference;


use crate::{
    model::field::{FieldKind, FieldModel},
    value::Primitive,
};
use std::fmt;

// re-exports
pub use getter::{GetByte, GetChar, GetDouble, GetFloat, GetInt, GetLong, GetShort, Getter};
pub use key::KeyExtractor;
pub use reference::{GetReference, ReferenceAccessor};

///
/// FieldAccessor
///
/// One recognized accessor, tagged by value kind.
///

pub enum FieldAccessor<E> {
    Byte(GetByte<E>),
    Short(GetShort<E>),
    Int(GetInt<E>),
    Long(GetLong<E>),
    Float(GetFloat<E>),
    Double(GetDouble<E>),
    Char(GetChar<E>),
    Reference(ReferenceAccessor<E>),
}

impl<E> FieldAccessor<E> {
    /// The field this accessor reads.
    #[must_use]
    pub const fn field(&self) -> &'static FieldModel {
        match self {
            Self::Byte(getter) => getter.field(),
            Self::Short(getter) => getter.field(),
            Self::Int(getter) => getter.field(),
            Self::Long(getter) => getter.field(),
            Self::Float(getter) => getter.field(),
            Self::Double(getter) => getter.field(),
            Self::Char(getter) => getter.field(),
            Self::Reference(accessor) => accessor.field(),
        }
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
}

impl<E, T: Primitive> From<Getter<E, T>> for FieldAccessor<E> {
    fn from(getter: Getter<E, T>) -> Self {
        T::wrap_accessor(getter)
    }
}

impl<E: 'static, V: Ord + ?Sized + 'static> From<GetReference<E, V>> for FieldAccessor<E> {
    fn from(getter: GetReference<E, V>) -> Self {
        Self::Reference(getter.into())
    }
}

impl<E> From<ReferenceAccessor<E>> for FieldAccessor<E> {
    fn from(accessor: ReferenceAccessor<E>) -> Self {
        Self::Reference(accessor)
    }
}

impl<E> Clone for FieldAccessor<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Byte(getter) => Self::Byte(*getter),
            Self::Short(getter) => Self::Short(*getter),
            Self::Int(getter) => Self::Int(*getter),
            Self::Long(getter) => Self::Long(*getter),
            Self::Float(getter) => Self::Float(*getter),
            Self::Double(getter) => Self::Double(*getter),
            Self::Char(getter) => Self::Char(*getter),
            Self::Reference(accessor) => Self::Reference(accessor.clone()),
        }
    }
}

impl<E> fmt::Debug for FieldAccessor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldAccessor")
            .field(&self.kind())
            .field(&self.field().qualified_name())
            .finish()
    }
}

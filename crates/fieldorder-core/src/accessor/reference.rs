use crate::{
    compare::{FieldComparator, ReferenceComparator},
    model::field::FieldModel,
    value::{NullOrder, compare_nullable},
};
use std::{cmp::Ordering, fmt, sync::Arc};

///
/// GetReference
///
/// Typed accessor for one nullable reference field.
/// `None` from the getter is the field's null.
///

pub struct GetReference<E, V: ?Sized> {
    field: &'static FieldModel,
    get: for<'e> fn(&'e E) -> Option<&'e V>,
}

impl<E, V: ?Sized> GetReference<E, V> {
    #[must_use]
    pub const fn new(field: &'static FieldModel, get: for<'e> fn(&'e E) -> Option<&'e V>) -> Self {
        Self { field, get }
    }

    #[must_use]
    pub const fn field(&self) -> &'static FieldModel {
        self.field
    }

    /// Read the field from one entity.
    #[inline]
    pub fn get<'e>(&self, entity: &'e E) -> Option<&'e V> {
        (self.get)(entity)
    }
}

impl<E: 'static, V: Ord + ?Sized + 'static> GetReference<E, V> {
    /// Ascending comparator over this field with the given null placement.
    #[must_use]
    pub fn comparator(self, nulls: NullOrder) -> FieldComparator<E> {
        FieldComparator::Reference(ReferenceComparator::new(self.into(), nulls, false))
    }
}

impl<E, V: ?Sized> Clone for GetReference<E, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, V: ?Sized> Copy for GetReference<E, V> {}

impl<E, V: ?Sized> fmt::Debug for GetReference<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetReference")
            .field("field", &self.field.qualified_name())
            .finish_non_exhaustive()
    }
}

///
/// ReferenceValues
///
/// Value-type-erased view of a reference accessor.
/// Lets one chain hold reference keys of different value types.
///

trait ReferenceValues<E>: Send + Sync {
    fn compare(&self, left: &E, right: &E, nulls: NullOrder) -> Ordering;

    fn is_null(&self, entity: &E) -> bool;
}

impl<E, V: Ord + ?Sized> ReferenceValues<E> for GetReference<E, V> {
    fn compare(&self, left: &E, right: &E, nulls: NullOrder) -> Ordering {
        compare_nullable(self.get(left), self.get(right), nulls)
    }

    fn is_null(&self, entity: &E) -> bool {
        self.get(entity).is_none()
    }
}

///
/// ReferenceAccessor
///
/// Erased reference accessor stored in `FieldAccessor::Reference`.
///

pub struct ReferenceAccessor<E> {
    field: &'static FieldModel,
    values: Arc<dyn ReferenceValues<E>>,
}

impl<E> ReferenceAccessor<E> {
    #[must_use]
    pub const fn field(&self) -> &'static FieldModel {
        self.field
    }

    /// Null-aware natural comparison of this field across two entities.
    #[inline]
    pub fn compare(&self, left: &E, right: &E, nulls: NullOrder) -> Ordering {
        self.values.compare(left, right, nulls)
    }

    #[must_use]
    pub fn is_null(&self, entity: &E) -> bool {
        self.values.is_null(entity)
    }
}

impl<E: 'static, V: Ord + ?Sized + 'static> From<GetReference<E, V>> for ReferenceAccessor<E> {
    fn from(getter: GetReference<E, V>) -> Self {
        Self {
            field: getter.field,
            values: Arc::new(getter),
        }
    }
}

impl<E> Clone for ReferenceAccessor<E> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            values: Arc::clone(&self.values),
        }
    }
}

impl<E> fmt::Debug for ReferenceAccessor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceAccessor")
            .field("field", &self.field.qualified_name())
            .finish_non_exhaustive()
    }
}

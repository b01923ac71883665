use crate::{
    accessor::{FieldAccessor, GetReference, Getter},
    value::Primitive,
};
use std::{fmt, sync::Arc};

pub(crate) type ExtractFn<E, K> = Arc<dyn Fn(&E) -> K + Send + Sync>;

///
/// KeyExtractor
///
/// Sort-key function handed to `then_comparing_*`.
///
/// Built either from an accessor (then it also remembers the accessor, and
/// the chain can specialize it into a typed field comparator) or from an
/// arbitrary closure (then only the extraction function is known).
///

pub struct KeyExtractor<E, K> {
    accessor: Option<FieldAccessor<E>>,
    extract: ExtractFn<E, K>,
}

impl<E, K> KeyExtractor<E, K> {
    /// Wrap a plain key function. Never specialized.
    pub fn extract<F>(extract: F) -> Self
    where
        F: Fn(&E) -> K + Send + Sync + 'static,
    {
        Self {
            accessor: None,
            extract: Arc::new(extract),
        }
    }

    /// The backing accessor, if this key was built from one.
    #[must_use]
    pub const fn accessor(&self) -> Option<&FieldAccessor<E>> {
        self.accessor.as_ref()
    }

    #[must_use]
    pub const fn is_field_backed(&self) -> bool {
        self.accessor.is_some()
    }

    /// Apply the key function to one entity.
    #[inline]
    pub fn key_of(&self, entity: &E) -> K {
        (self.extract)(entity)
    }

    pub(crate) fn into_parts(self) -> (Option<FieldAccessor<E>>, ExtractFn<E, K>) {
        (self.accessor, self.extract)
    }
}

impl<E: 'static, T: Primitive> From<Getter<E, T>> for KeyExtractor<E, T> {
    fn from(getter: Getter<E, T>) -> Self {
        Self {
            accessor: Some(getter.into()),
            extract: Arc::new(move |entity: &E| getter.get(entity)),
        }
    }
}

impl<E, V> From<GetReference<E, V>> for KeyExtractor<E, Option<V::Owned>>
where
    E: 'static,
    V: Ord + ToOwned + ?Sized + 'static,
{
    fn from(getter: GetReference<E, V>) -> Self {
        Self {
            accessor: Some(getter.into()),
            extract: Arc::new(move |entity: &E| getter.get(entity).map(ToOwned::to_owned)),
        }
    }
}

impl<E, K> Clone for KeyExtractor<E, K> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<E, K> fmt::Debug for KeyExtractor<E, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyExtractor")
            .field("accessor", &self.accessor)
            .finish_non_exhaustive()
    }
}

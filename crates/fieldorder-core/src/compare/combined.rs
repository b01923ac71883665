use crate::{
    accessor::{FieldAccessor, KeyExtractor},
    compare::{
        ChainPolicy, FieldComparator, Link, OpaqueComparator, OpaqueReason, field::apply_reversal,
    },
    obs::sink::{MetricsEvent, record},
    value::{NullOrder, Primitive, compare_nullable},
};
use std::{cmp::Ordering, fmt, sync::Arc};

///
/// CombinedComparator
///
/// Ordered sequence of links plus a chain-level reversal flag.
///
/// The effective comparison of `(a, b)` is the first non-equal link result
/// (each link already applies its own direction), negated once more when the
/// chain is reversed. Values are persistent: reversal shares the link
/// sequence, extension copies it into a new one, and no operation mutates an
/// existing comparator.
///

pub struct CombinedComparator<E> {
    links: Arc<[Link<E>]>,
    reversed: bool,
    policy: ChainPolicy,
}

impl<E> CombinedComparator<E> {
    /// Chain over the given field comparators, primary key first.
    #[must_use]
    pub fn new(comparators: impl IntoIterator<Item = FieldComparator<E>>) -> Self {
        Self {
            links: comparators.into_iter().map(Link::Field).collect(),
            reversed: false,
            policy: ChainPolicy::default(),
        }
    }

    /// Chain with no keys; every pair compares equal.
    #[must_use]
    pub fn empty() -> Self {
        Self::new([])
    }

    /// Same links and direction under a different policy.
    #[must_use]
    pub fn with_policy(self, policy: ChainPolicy) -> Self {
        Self { policy, ..self }
    }

    #[must_use]
    pub const fn policy(&self) -> ChainPolicy {
        self.policy
    }

    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    #[inline]
    pub fn compare(&self, left: &E, right: &E) -> Ordering {
        for link in &*self.links {
            let ordering = link.compare(left, right);

            if ordering != Ordering::Equal {
                return apply_reversal(ordering, self.reversed);
            }
        }

        Ordering::Equal
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Number of typed field links.
    #[must_use]
    pub fn size(&self) -> usize {
        self.fields().count()
    }

    /// Number of links of any kind.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Every link in priority order, opaque ones included.
    #[must_use]
    pub fn links(&self) -> &[Link<E>] {
        &self.links
    }

    /// Typed field links in priority order, as stored.
    ///
    /// Stored directions are relative to the unreversed chain; see
    /// [`Self::effective_fields`] for directions with the chain flag folded in.
    pub fn fields(&self) -> impl Iterator<Item = &FieldComparator<E>> + '_ {
        self.links.iter().filter_map(Link::as_field)
    }

    /// Typed field links with the chain-level reversal applied to each.
    pub fn effective_fields(&self) -> impl Iterator<Item = FieldComparator<E>> + '_ {
        self.fields().map(|comparator| {
            if self.reversed {
                comparator.reversed()
            } else {
                comparator.clone()
            }
        })
    }

    /// True when no link is opaque.
    #[must_use]
    pub fn is_introspectable(&self) -> bool {
        !self.links.iter().any(Link::is_opaque)
    }

    // ------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------

    /// Same links, opposite chain direction. Link flags are untouched.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            links: Arc::clone(&self.links),
            reversed: !self.reversed,
            policy: self.policy,
        }
    }

    /// Append one link.
    ///
    /// A field comparator is stored reversed when the chain is reversed, so
    /// after the chain flag is applied it still sorts in the direction the
    /// caller gave it. Any other comparator becomes an opaque link that is
    /// consulted on ties and is subject to the chain flag as-is.
    #[must_use]
    pub fn then_comparing(&self, other: impl Into<Link<E>>) -> Self {
        match other.into() {
            Link::Field(comparator) => {
                let comparator = if self.reversed {
                    comparator.reversed()
                } else {
                    comparator
                };
                record(MetricsEvent::FieldLinkAppended {
                    kind: comparator.kind(),
                });

                self.append(Link::Field(comparator))
            }
            Link::Opaque(comparator) => {
                let reason = comparator.reason();
                tracing::debug!(
                    %reason,
                    position = self.links.len(),
                    "appending opaque comparator link"
                );
                record(MetricsEvent::OpaqueLinkAppended { reason });

                self.append(Link::Opaque(comparator))
            }
        }
    }

    fn append(&self, link: Link<E>) -> Self {
        let links = self.links.iter().cloned().chain(std::iter::once(link)).collect();

        Self {
            links,
            reversed: self.reversed,
            policy: self.policy,
        }
    }

    // Resolve an extractor's accessor into a typed comparator, or report why
    // the generic path has to be taken. Extractor keys inherit the chain's
    // direction: the comparator is built pre-reversed for a reversed chain,
    // then stored through `then_comparing`.
    fn specialize(
        &self,
        accessor: Option<FieldAccessor<E>>,
    ) -> Result<FieldComparator<E>, OpaqueReason> {
        let accessor = accessor.ok_or(OpaqueReason::UnrecognizedExtractor)?;
        if !self.policy.specialize {
            return Err(OpaqueReason::SpecializationDisabled);
        }

        Ok(FieldComparator::from_accessor(
            accessor,
            self.reversed,
            self.policy.reference_null_order,
        ))
    }
}

impl<E: 'static> CombinedComparator<E> {
    /// Append a key compared by natural order.
    ///
    /// Accessor-backed keys become typed field links that place nulls by the
    /// chain policy. Anything else becomes an opaque link where `None` always
    /// sorts last. A closure over a non-optional value wraps it in `Some`:
    ///
    /// ```ignore
    /// chain.then_comparing_key(KeyExtractor::extract(|row: &Row| Some(row.name.clone())))
    /// ```
    #[must_use]
    pub fn then_comparing_key<K>(&self, key: impl Into<KeyExtractor<E, Option<K>>>) -> Self
    where
        K: Ord + 'static,
    {
        let (accessor, extract) = key.into().into_parts();

        match self.specialize(accessor) {
            Ok(comparator) => self.then_comparing(comparator),
            Err(reason) => self.push_opaque(reason, move |left, right| {
                compare_nullable(
                    extract(left).as_ref(),
                    extract(right).as_ref(),
                    NullOrder::Last,
                )
            }),
        }
    }

    /// Append a key compared by an explicit comparator.
    ///
    /// Never specialized, for any key kind: an accessor-backed reference or
    /// primitive key still becomes an opaque link, so the given comparator
    /// decides both value order and null placement.
    #[must_use]
    pub fn then_comparing_key_with<K, C>(
        &self,
        key: impl Into<KeyExtractor<E, K>>,
        key_comparator: C,
    ) -> Self
    where
        K: 'static,
        C: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        let (_, extract) = key.into().into_parts();

        self.push_opaque(OpaqueReason::ExplicitKeyComparator, move |left, right| {
            key_comparator(&extract(left), &extract(right))
        })
    }

    /// Append a primitive key compared by its natural order.
    #[must_use]
    pub fn then_comparing_primitive<T: Primitive>(
        &self,
        key: impl Into<KeyExtractor<E, T>>,
    ) -> Self {
        let (accessor, extract) = key.into().into_parts();

        match self.specialize(accessor) {
            Ok(comparator) => self.then_comparing(comparator),
            Err(reason) => self.push_opaque(reason, move |left, right| {
                T::natural_cmp(extract(left), extract(right))
            }),
        }
    }

    #[must_use]
    pub fn then_comparing_int(&self, key: impl Into<KeyExtractor<E, i32>>) -> Self {
        self.then_comparing_primitive(key)
    }

    #[must_use]
    pub fn then_comparing_long(&self, key: impl Into<KeyExtractor<E, i64>>) -> Self {
        self.then_comparing_primitive(key)
    }

    #[must_use]
    pub fn then_comparing_double(&self, key: impl Into<KeyExtractor<E, f64>>) -> Self {
        self.then_comparing_primitive(key)
    }

    fn push_opaque<F>(&self, reason: OpaqueReason, compare: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    {
        self.then_comparing(Link::Opaque(OpaqueComparator::new(
            Arc::new(compare),
            reason,
        )))
    }
}

impl<E> Clone for CombinedComparator<E> {
    fn clone(&self) -> Self {
        Self {
            links: Arc::clone(&self.links),
            reversed: self.reversed,
            policy: self.policy,
        }
    }
}

impl<E> Default for CombinedComparator<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> From<FieldComparator<E>> for CombinedComparator<E> {
    fn from(comparator: FieldComparator<E>) -> Self {
        Self::new([comparator])
    }
}

impl<E> fmt::Debug for CombinedComparator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedComparator")
            .field("links", &self.links)
            .field("reversed", &self.reversed)
            .field("policy", &self.policy)
            .finish()
    }
}

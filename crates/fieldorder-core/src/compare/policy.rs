use crate::value::NullOrder;
use serde::{Deserialize, Serialize};

///
/// ChainPolicy
///
/// Per-chain knobs inherited by every comparator derived from a chain.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChainPolicy {
    /// Turn accessor-backed key extractors into typed field comparators.
    pub specialize: bool,
    /// Null placement given to specialized reference keys.
    pub reference_null_order: NullOrder,
}

impl ChainPolicy {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            specialize: true,
            reference_null_order: NullOrder::Last,
        }
    }

    /// Policy that keeps every extractor on the generic path.
    #[must_use]
    pub const fn generic_only() -> Self {
        Self {
            specialize: false,
            reference_null_order: NullOrder::Last,
        }
    }

    #[must_use]
    pub const fn with_reference_null_order(mut self, nulls: NullOrder) -> Self {
        self.reference_null_order = nulls;
        self
    }
}

impl Default for ChainPolicy {
    fn default() -> Self {
        Self::new()
    }
}

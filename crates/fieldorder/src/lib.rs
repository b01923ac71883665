//! ## Crate layout
//! - `core`: accessors, field and combined comparators, ORDER BY translation,
//!   and observability.
//! - `config`: TOML loading for chain policy.
//!
//! The `prelude` module is the vocabulary most callers need to declare
//! accessors and build chains.

pub use fieldorder_config as config;
pub use fieldorder_core as core;

use crate::{config::OrderingConfig, core::compare::CombinedComparator};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Empty chain carrying the policy a config document describes.
#[must_use]
pub fn configured_chain<E>(config: &OrderingConfig) -> CombinedComparator<E> {
    CombinedComparator::empty().with_policy(config.chain_policy())
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::OrderingConfig,
        configured_chain,
        core::{error::OrderTranslateError, prelude::*},
    };
}

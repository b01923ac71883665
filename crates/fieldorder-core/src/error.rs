use thiserror::Error as ThisError;

///
/// OrderTranslateError
///
/// Reasons a combined comparator cannot be read back as an `OrderSpec`.
/// The comparator itself is still usable for in-memory sorting.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum OrderTranslateError {
    /// A link has no field identity.
    #[error("comparator link {position} is opaque and has no field identity")]
    OpaqueLink { position: usize },

    /// A typed link names a field the target entity does not declare.
    #[error("order field '{field}' is not declared on entity '{entity}'")]
    UnknownField { entity: String, field: String },

    /// The chain has no links at all.
    #[error("comparator has no keys to order by")]
    EmptyOrder,
}

use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// FieldKind
///
/// Value shape of one field as seen by the comparator layer.
/// One variant per primitive width plus a single reference kind; the set is
/// closed so accessor dispatch can match on it exhaustively.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum FieldKind {
    #[display("byte")]
    Byte,
    #[display("short")]
    Short,
    #[display("int")]
    Int,
    #[display("long")]
    Long,
    #[display("float")]
    Float,
    #[display("double")]
    Double,
    #[display("char")]
    Char,
    #[display("reference")]
    Reference,
}

impl FieldKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Char,
        Self::Reference,
    ];

    /// True for the unboxed primitive kinds.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        !matches!(self, Self::Reference)
    }

    /// True for kinds whose values can be absent.
    #[must_use]
    pub const fn is_nullable(self) -> bool {
        matches!(self, Self::Reference)
    }
}

///
/// FieldModel
///
/// Runtime field metadata shared by accessors and ORDER BY translation.
/// Identity is structural: two models naming the same entity/field/kind
/// are the same field.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FieldModel {
    /// Owning entity name.
    pub entity: &'static str,
    /// Field name as used in ordering specs.
    pub name: &'static str,
    /// Value shape read by the field's accessor.
    pub kind: FieldKind,
}

impl FieldModel {
    #[must_use]
    pub const fn new(entity: &'static str, name: &'static str, kind: FieldKind) -> Self {
        Self { entity, name, kind }
    }

    /// `entity.field`, for diagnostics.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.entity, self.name)
    }
}

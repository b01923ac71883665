use crate::model::field::FieldModel;

///
/// EntityModel
/// Minimal runtime model for one entity: its name and ordered field list.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Stable external name used in diagnostics and ordering specs.
    pub entity_name: &'static str,
    /// Ordered field list (authoritative for ORDER BY translation).
    pub fields: &'static [&'static FieldModel],
}

impl EntityModel {
    #[must_use]
    pub const fn new(entity_name: &'static str, fields: &'static [&'static FieldModel]) -> Self {
        Self {
            entity_name,
            fields,
        }
    }

    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().copied().find(|field| field.name == name)
    }

    /// Resolve a field name to its slot in `fields`.
    #[must_use]
    pub fn resolve_field_slot(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// True if `field` belongs to this entity.
    #[must_use]
    pub fn contains(&self, field: &FieldModel) -> bool {
        field.entity == self.entity_name && self.field(field.name).is_some_and(|f| f == field)
    }
}

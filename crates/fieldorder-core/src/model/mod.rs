//! Runtime data model definitions.
//!
//! Types in `model` describe the entities and fields that accessors read
//! from. They are declared once per entity (usually as statics next to the
//! entity type) and shared read-only by every comparator built on top.
//!
//! In general:
//! - Entity code defines *what exists*
//! - `model` names *what is compared*
pub mod entity;
pub mod field;

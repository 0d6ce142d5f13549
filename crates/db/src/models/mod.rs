//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` entity struct matching the fixture JSON
//! - A create DTO; the store assigns `Id` and, when unset, `createdAt`
//! - An update DTO (all `Option` fields) merged field-by-field over the
//!   stored entity

pub mod article;
pub mod course;
pub mod testimonial;

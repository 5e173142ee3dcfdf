//! Row structs and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A conversion into the read-only view used by `vislab-core`

pub mod class;
pub mod image;
pub mod label;
pub mod model;

//! Entity structs and DTOs for stored school records.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as handed back by the store
//! - A `Deserialize` create DTO for appends

pub mod school;

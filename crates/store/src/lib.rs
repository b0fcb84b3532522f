//! Storage layer for the school directory.
//!
//! Defines the append-only [`SchoolStore`] contract consumed by the form
//! controller, the entity/DTO models, and [`MemoryStore`], an in-memory
//! reference implementation.

pub mod memory;
pub mod models;

pub use memory::MemoryStore;
pub use models::school::{NewSchool, School};

use async_trait::async_trait;

/// Errors surfaced by a [`SchoolStore`] implementation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The store refused the record (e.g. a capacity or uniqueness rule).
    #[error("Store rejected the record: {reason}")]
    Rejected { reason: String },

    /// The store could not be reached or its state is unusable.
    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Append-only keeper of school records.
///
/// The form controller requires exactly this one operation. Listing and
/// richer queries are an implementation's own concern.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Append a validated record, returning the stored entity with its
    /// assigned id and creation timestamp.
    ///
    /// Callers must run the draft through the validation engine first; the
    /// store does not re-check field constraints.
    async fn add_school(&self, new: NewSchool) -> Result<School, StoreError>;
}

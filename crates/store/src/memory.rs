//! In-memory reference implementation of [`SchoolStore`].

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::school::{NewSchool, School};
use crate::{SchoolStore, StoreError};

/// Append-only store backed by a `Mutex<Vec<School>>`.
///
/// Intended for tests and local use; a persistent implementation slots in
/// behind the same [`SchoolStore`] trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    schools: Mutex<Vec<School>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// An empty store with no capacity limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects appends once `limit` records are held.
    ///
    /// Lets callers exercise the submission failure path without writing a
    /// custom [`SchoolStore`] double.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            schools: Mutex::new(Vec::new()),
            capacity: Some(limit),
        }
    }

    /// Snapshot of every stored record in insertion order.
    pub fn schools(&self) -> Vec<School> {
        self.lock().clone()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<School>> {
        self.schools.lock().expect("school store mutex poisoned")
    }
}

#[async_trait]
impl SchoolStore for MemoryStore {
    async fn add_school(&self, new: NewSchool) -> Result<School, StoreError> {
        let mut schools = self
            .schools
            .lock()
            .map_err(|_| StoreError::Unavailable {
                reason: "school store mutex poisoned".to_string(),
            })?;

        if let Some(limit) = self.capacity {
            if schools.len() >= limit {
                return Err(StoreError::Rejected {
                    reason: format!("store is full ({limit} records)"),
                });
            }
        }

        let school = School {
            id: Uuid::new_v4(),
            name: new.name,
            address: new.address,
            city: new.city,
            state: new.state,
            contact: new.contact,
            email_id: new.email_id,
            image: new.image,
            created_at: Utc::now(),
        };
        schools.push(school.clone());

        tracing::debug!(school_id = %school.id, name = %school.name, "School appended");
        Ok(school)
    }
}

//! Author entity.

use serde::{Deserialize, Serialize};

/// Repository-assigned author identity.
///
/// Values below 1 mean "not assigned yet" when passed to a repository `add`.
pub type AuthorId = i64;

/// Author record as owned by an author repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    /// Creates an author with a known identity.
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Creates an author that asks the repository to assign a fresh identity.
    pub fn unassigned(name: impl Into<String>) -> Self {
        Self::new(0, name)
    }

    /// Returns whether this record already carries a usable identity.
    pub fn has_id(&self) -> bool {
        self.id >= 1
    }
}

//! Repository contracts and in-memory implementations.
//!
//! # Responsibility
//! - Own the authoritative record collections for each entity.
//! - Assign identities and answer exact-match lookups.
//!
//! # Invariants
//! - `add` with an id below 1 assigns `max(existing) + 1`, or 1 when empty.
//! - `add` with an id of 1 or more stores that id unchanged.
//! - Lookups return the first match in insertion order.
//! - A miss is reported as `RepoError::NotFound` carrying the search key.
//! - When the highest stored id is `i64::MAX`, assignment reports
//!   `RepoError::IdSpaceExhausted` instead of wrapping.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author_repo;
pub mod post_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Entity family a repository is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Author,
    Post,
}

impl Entity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Post => "post",
        }
    }
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key used for a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Id(i64),
    Title(String),
}

impl Display for LookupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Title(title) => write!(f, "title |{title}|"),
        }
    }
}

/// Repository error for record lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound { entity: Entity, key: LookupKey },
    /// No identity above the current maximum is left to assign.
    IdSpaceExhausted { entity: Entity },
}

impl RepoError {
    pub(crate) fn not_found_id(entity: Entity, id: i64) -> Self {
        Self::NotFound {
            entity,
            key: LookupKey::Id(id),
        }
    }

    pub(crate) fn not_found_title(entity: Entity, title: &str) -> Self {
        Self::NotFound {
            entity,
            key: LookupKey::Title(title.to_string()),
        }
    }

    /// Entity whose repository reported the error.
    pub fn entity(&self) -> Entity {
        match self {
            Self::NotFound { entity, .. } | Self::IdSpaceExhausted { entity } => *entity,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, key } => write!(f, "{entity} not found: could not find {key}"),
            Self::IdSpaceExhausted { entity } => {
                write!(f, "{entity} ids exhausted: no id above {} to assign", i64::MAX)
            }
        }
    }
}

impl Error for RepoError {}

/// Computes the next identity for a collection: highest existing id + 1.
///
/// Returns 1 for an empty collection or one holding only unassigned ids.
pub(crate) fn next_id(entity: Entity, ids: impl IntoIterator<Item = i64>) -> RepoResult<i64> {
    ids.into_iter()
        .fold(0, i64::max)
        .checked_add(1)
        .ok_or(RepoError::IdSpaceExhausted { entity })
}

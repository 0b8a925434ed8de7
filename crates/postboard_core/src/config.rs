//! Seed configuration for the in-memory repositories.
//!
//! # Responsibility
//! - Describe the initial author/post collections as explicit data.
//! - Load that data from JSON and build repositories from it.
//!
//! # Invariants
//! - Seed records carry assigned ids in `1..=MAX_SEED_ID`, unique per
//!   collection, so the first repository-assigned id cannot overflow.
//! - Seed author names are not blank.

use crate::model::author::Author;
use crate::model::post::StoredPost;
use crate::repo::author_repo::MemoryAuthorRepository;
use crate::repo::post_repo::MemoryPostRepository;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Highest id a seed record may carry.
pub const MAX_SEED_ID: i64 = i64::MAX - 1;

/// Errors raised while loading a seed file.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidSeed(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed file `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid seed json: {err}"),
            Self::InvalidSeed(message) => write!(f, "invalid seed data: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidSeed(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Initial repository contents.
///
/// JSON shape: `{ "authors": [{ "id", "name" }], "posts": [{ "id",
/// "author_id", "title", "body" }] }`. Either array may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub authors: Vec<Author>,
    pub posts: Vec<StoredPost>,
}

impl SeedConfig {
    /// Seed used by the demo entry points: two authors, no posts.
    pub fn demo() -> Self {
        Self {
            authors: vec![
                Author::new(1, "Joe Jones"),
                Author::new(2, "Sue Sutherland"),
            ],
            posts: Vec::new(),
        }
    }

    /// Parses and validates a JSON seed document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let seed: Self = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Reads, parses and validates a JSON seed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::from_json_str(&raw)?;
        info!(
            "event=seed_load module=config status=ok authors={} posts={}",
            seed.authors.len(),
            seed.posts.len()
        );
        Ok(seed)
    }

    /// Checks seed records for in-range, unique ids and non-blank names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ids("author", self.authors.iter().map(|author| author.id))?;
        check_ids("post", self.posts.iter().map(|post| post.id))?;

        if let Some(author) = self.authors.iter().find(|a| a.name.trim().is_empty()) {
            return Err(ConfigError::InvalidSeed(format!(
                "author {} has a blank name",
                author.id
            )));
        }
        Ok(())
    }

    pub fn author_repository(&self) -> MemoryAuthorRepository {
        MemoryAuthorRepository::new(self.authors.clone())
    }

    pub fn post_repository(&self) -> MemoryPostRepository {
        MemoryPostRepository::new(self.posts.clone())
    }
}

fn check_ids(kind: &str, ids: impl Iterator<Item = i64>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id < 1 {
            return Err(ConfigError::InvalidSeed(format!(
                "{kind} id must be at least 1, got {id}"
            )));
        }
        if id > MAX_SEED_ID {
            return Err(ConfigError::InvalidSeed(format!(
                "{kind} id must be at most {MAX_SEED_ID}, got {id}"
            )));
        }
        if !seen.insert(id) {
            return Err(ConfigError::InvalidSeed(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SeedConfig};

    #[test]
    fn demo_seed_is_valid() {
        let seed = SeedConfig::demo();
        seed.validate().unwrap();
        assert_eq!(seed.authors.len(), 2);
        assert!(seed.posts.is_empty());
    }

    #[test]
    fn missing_arrays_default_to_empty() {
        let seed = SeedConfig::from_json_str("{}").unwrap();
        assert_eq!(seed, SeedConfig::default());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = SeedConfig::from_json_str(
            r#"{ "authors": [{ "id": 1, "name": "Ann" }, { "id": 1, "name": "Bob" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed(message) if message.contains("duplicate")));
    }

    #[test]
    fn unassigned_and_blank_records_are_rejected() {
        let err = SeedConfig::from_json_str(
            r#"{ "posts": [{ "id": 0, "author_id": 1, "title": "Hello", "body": "" }] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("post id must be at least 1"));

        let err = SeedConfig::from_json_str(r#"{ "authors": [{ "id": 4, "name": "  " }] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("blank name"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SeedConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

//! Core of the postboard demo: author and post repositories plus the
//! use-case services layered on top of them.
//! This crate is the single source of truth for business rules.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, SeedConfig, MAX_SEED_ID};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingConfig};
pub use model::author::{Author, AuthorId};
pub use model::post::{Post, PostId, StoredPost};
pub use repo::author_repo::{AuthorRepository, MemoryAuthorRepository};
pub use repo::post_repo::{MemoryPostRepository, PostRepository};
pub use repo::{Entity, LookupKey, RepoError, RepoResult};
pub use service::author_service::{AuthorService, AuthorServiceBuilder};
pub use service::error::{ServiceError, ServiceResult, ValidationError};
pub use service::post_service::{AuthorCheck, PostService, PostServiceBuilder};
pub use service::rules::{MIN_AUTHOR_NAME_CHARS, MIN_POST_TITLE_CHARS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

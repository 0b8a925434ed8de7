//! Author use-case service.
//!
//! # Responsibility
//! - Enforce author business rules before delegating to the repository.
//! - Keep callers independent of the repository implementation.
//!
//! # Invariants
//! - Invalid input never reaches the repository.
//! - Repository errors are returned unchanged.

use crate::model::author::{Author, AuthorId};
use crate::repo::author_repo::AuthorRepository;
use crate::repo::Entity;
use crate::service::error::{ServiceError, ServiceResult};
use crate::service::rules::{check_author_name, check_lookup_id};
use log::debug;

/// Author service facade over a repository implementation.
///
/// Pass `&repo` to share one repository with other services.
#[derive(Debug)]
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Starts a builder that reports a missing repository as an error.
    pub fn builder() -> AuthorServiceBuilder<R> {
        AuthorServiceBuilder::default()
    }

    /// Creates a new author with a repository-assigned id.
    ///
    /// # Errors
    /// - `ValidationError::NameTooShort` when `name` has fewer than 3 characters.
    pub fn add(&self, name: impl Into<String>) -> ServiceResult<Author> {
        let name = name.into();
        check_author_name(&name)?;

        let author = self.repo.add(Author::unassigned(name))?;
        debug!(
            "event=author_add module=service status=ok author_id={}",
            author.id
        );
        Ok(author)
    }

    /// Gets one author by id.
    ///
    /// # Errors
    /// - `ValidationError::NonPositiveId` when `id < 1`.
    /// - `RepoError::NotFound` from the repository, unchanged.
    pub fn get_by_id(&self, id: AuthorId) -> ServiceResult<Author> {
        check_lookup_id(Entity::Author, id)?;
        Ok(self.repo.get_by_id(id)?)
    }
}

/// Fallible constructor for [`AuthorService`].
#[derive(Debug)]
pub struct AuthorServiceBuilder<R> {
    repo: Option<R>,
}

impl<R> Default for AuthorServiceBuilder<R> {
    fn default() -> Self {
        Self { repo: None }
    }
}

impl<R: AuthorRepository> AuthorServiceBuilder<R> {
    pub fn repo(mut self, repo: R) -> Self {
        self.repo = Some(repo);
        self
    }

    /// # Errors
    /// - `ServiceError::Configuration` when no repository was supplied.
    pub fn build(self) -> ServiceResult<AuthorService<R>> {
        let repo = self.repo.ok_or(ServiceError::Configuration {
            dependency: "author repository",
        })?;
        Ok(AuthorService::new(repo))
    }
}

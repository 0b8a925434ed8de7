//! Post use-case service.
//!
//! # Responsibility
//! - Enforce post business rules before delegating to the post repository.
//! - Resolve each stored post's author and return the `Post` composite.
//!
//! # Invariants
//! - Invalid input never reaches a repository.
//! - `NotFound` from either repository is returned unchanged, so callers can
//!   tell which lookup missed via `ServiceError::not_found_entity`.
//! - With `AuthorCheck::Deferred`, a post whose author cannot be resolved is
//!   still stored; there is no rollback.

use crate::model::author::AuthorId;
use crate::model::post::{Post, PostId, StoredPost};
use crate::repo::author_repo::AuthorRepository;
use crate::repo::post_repo::PostRepository;
use crate::repo::Entity;
use crate::service::error::{ServiceError, ServiceResult};
use crate::service::rules::{check_lookup_id, check_post_title};
use log::debug;

/// When `PostService::add` checks that the referenced author exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorCheck {
    /// Store first, then resolve the author for the returned composite.
    /// A missing author is reported after the post is already stored.
    #[default]
    Deferred,
    /// Resolve the author first; nothing is stored when it is missing.
    Strict,
}

/// Post service facade over post and author repositories.
#[derive(Debug)]
pub struct PostService<P: PostRepository, A: AuthorRepository> {
    post_repo: P,
    author_repo: A,
    author_check: AuthorCheck,
}

impl<P: PostRepository, A: AuthorRepository> PostService<P, A> {
    /// Creates a service with the default `AuthorCheck::Deferred` policy.
    pub fn new(post_repo: P, author_repo: A) -> Self {
        Self {
            post_repo,
            author_repo,
            author_check: AuthorCheck::default(),
        }
    }

    /// Starts a builder that reports missing repositories as errors.
    pub fn builder() -> PostServiceBuilder<P, A> {
        PostServiceBuilder::default()
    }

    pub fn author_check(&self) -> AuthorCheck {
        self.author_check
    }

    /// Stores a new post and returns it with its author resolved.
    ///
    /// # Errors
    /// - `ValidationError::TitleTooShort` when `title` has fewer than 5 characters.
    /// - `RepoError::NotFound` for the author when `author_id` does not resolve.
    ///   Under `AuthorCheck::Deferred` the post has been stored anyway.
    pub fn add(
        &self,
        author_id: AuthorId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> ServiceResult<Post> {
        let title = title.into();
        check_post_title(&title)?;
        let record = StoredPost::unassigned(author_id, title, body);

        let post = match self.author_check {
            AuthorCheck::Deferred => {
                let stored = self.post_repo.add(record)?;
                self.fill_post(stored)?
            }
            AuthorCheck::Strict => {
                let author = self.author_repo.get_by_id(author_id)?;
                Post::new(self.post_repo.add(record)?, author)
            }
        };

        debug!(
            "event=post_add module=service status=ok post_id={} author_id={}",
            post.id(),
            post.author_id()
        );
        Ok(post)
    }

    /// Gets one post by id with its author resolved.
    ///
    /// # Errors
    /// - `ValidationError::NonPositiveId` when `id < 1`.
    /// - `RepoError::NotFound` from the post or the author repository.
    pub fn get_by_id(&self, id: PostId) -> ServiceResult<Post> {
        check_lookup_id(Entity::Post, id)?;
        let stored = self.post_repo.get_by_id(id)?;
        self.fill_post(stored)
    }

    /// Gets the first post with exactly this title, author resolved.
    ///
    /// # Errors
    /// - `ValidationError::TitleTooShort` when `title` has fewer than 5 characters.
    /// - `RepoError::NotFound` from the post or the author repository.
    pub fn get_by_title(&self, title: &str) -> ServiceResult<Post> {
        check_post_title(title)?;
        let stored = self.post_repo.get_by_title(title)?;
        self.fill_post(stored)
    }

    /// Resolves the author referenced by `stored` and builds the composite.
    pub fn fill_post(&self, stored: StoredPost) -> ServiceResult<Post> {
        let author = self.author_repo.get_by_id(stored.author_id)?;
        Ok(Post::new(stored, author))
    }
}

/// Fallible constructor for [`PostService`].
#[derive(Debug)]
pub struct PostServiceBuilder<P, A> {
    post_repo: Option<P>,
    author_repo: Option<A>,
    author_check: AuthorCheck,
}

impl<P, A> Default for PostServiceBuilder<P, A> {
    fn default() -> Self {
        Self {
            post_repo: None,
            author_repo: None,
            author_check: AuthorCheck::default(),
        }
    }
}

impl<P: PostRepository, A: AuthorRepository> PostServiceBuilder<P, A> {
    pub fn post_repo(mut self, repo: P) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn author_repo(mut self, repo: A) -> Self {
        self.author_repo = Some(repo);
        self
    }

    pub fn author_check(mut self, check: AuthorCheck) -> Self {
        self.author_check = check;
        self
    }

    /// # Errors
    /// - `ServiceError::Configuration` naming the first missing repository,
    ///   post repository first.
    pub fn build(self) -> ServiceResult<PostService<P, A>> {
        let post_repo = self.post_repo.ok_or(ServiceError::Configuration {
            dependency: "post repository",
        })?;
        let author_repo = self.author_repo.ok_or(ServiceError::Configuration {
            dependency: "author repository",
        })?;
        Ok(PostService {
            post_repo,
            author_repo,
            author_check: self.author_check,
        })
    }
}

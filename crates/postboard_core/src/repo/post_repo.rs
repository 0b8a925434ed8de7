//! Post repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the stored-post collection and assign post identities.
//! - Answer exact id and exact title lookups.
//!
//! # Invariants
//! - Post ids live in their own space, independent of author ids.
//! - Title matching is exact and case-sensitive; the earliest insert wins.
//! - `author_id` is never checked here.

use crate::model::post::{PostId, StoredPost};
use crate::repo::{next_id, Entity, RepoError, RepoResult};
use std::cell::RefCell;

/// Repository interface for stored-post storage.
pub trait PostRepository {
    /// Stores one post, assigning an identity when `post.id < 1`.
    ///
    /// Only fails with `RepoError::IdSpaceExhausted` when an id must be
    /// assigned and `i64::MAX` is already taken.
    fn add(&self, post: StoredPost) -> RepoResult<StoredPost>;
    /// Gets one post by exact identity.
    fn get_by_id(&self, id: PostId) -> RepoResult<StoredPost>;
    /// Gets the first post whose title equals `title`.
    fn get_by_title(&self, title: &str) -> RepoResult<StoredPost>;
}

impl<R: PostRepository + ?Sized> PostRepository for &R {
    fn add(&self, post: StoredPost) -> RepoResult<StoredPost> {
        (**self).add(post)
    }

    fn get_by_id(&self, id: PostId) -> RepoResult<StoredPost> {
        (**self).get_by_id(id)
    }

    fn get_by_title(&self, title: &str) -> RepoResult<StoredPost> {
        (**self).get_by_title(title)
    }
}

/// Vec-backed post repository. Single-threaded only.
#[derive(Debug, Default)]
pub struct MemoryPostRepository {
    posts: RefCell<Vec<StoredPost>>,
}

impl MemoryPostRepository {
    /// Creates a repository seeded with `posts` in the given order.
    pub fn new(posts: Vec<StoredPost>) -> Self {
        Self {
            posts: RefCell::new(posts),
        }
    }

    /// Snapshot of all records in insertion order.
    pub fn records(&self) -> Vec<StoredPost> {
        self.posts.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.posts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.borrow().is_empty()
    }

    fn find(&self, predicate: impl Fn(&StoredPost) -> bool) -> Option<StoredPost> {
        self.posts.borrow().iter().find(|post| predicate(post)).cloned()
    }
}

impl PostRepository for MemoryPostRepository {
    fn add(&self, mut post: StoredPost) -> RepoResult<StoredPost> {
        if !post.has_id() {
            post.id = next_id(
                Entity::Post,
                self.posts.borrow().iter().map(|existing| existing.id),
            )?;
        }
        self.posts.borrow_mut().push(post.clone());
        Ok(post)
    }

    fn get_by_id(&self, id: PostId) -> RepoResult<StoredPost> {
        self.find(|post| post.id == id)
            .ok_or_else(|| RepoError::not_found_id(Entity::Post, id))
    }

    fn get_by_title(&self, title: &str) -> RepoResult<StoredPost> {
        self.find(|post| post.title == title)
            .ok_or_else(|| RepoError::not_found_title(Entity::Post, title))
    }
}

//! Author repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the author collection and assign author identities.
//! - Answer exact id lookups.
//!
//! # Invariants
//! - Records are append-only; nothing is removed or edited in place.
//! - Identity assignment follows the policy documented in `repo`.

use crate::model::author::{Author, AuthorId};
use crate::repo::{next_id, Entity, RepoError, RepoResult};
use std::cell::RefCell;

/// Repository interface for author storage.
pub trait AuthorRepository {
    /// Stores one author, assigning an identity when `author.id < 1`.
    ///
    /// Only fails with `RepoError::IdSpaceExhausted` when an id must be
    /// assigned and `i64::MAX` is already taken.
    fn add(&self, author: Author) -> RepoResult<Author>;
    /// Gets one author by exact identity.
    fn get_by_id(&self, id: AuthorId) -> RepoResult<Author>;
}

impl<R: AuthorRepository + ?Sized> AuthorRepository for &R {
    fn add(&self, author: Author) -> RepoResult<Author> {
        (**self).add(author)
    }

    fn get_by_id(&self, id: AuthorId) -> RepoResult<Author> {
        (**self).get_by_id(id)
    }
}

/// Vec-backed author repository.
///
/// Single-threaded only: the collection sits behind a `RefCell` so a shared
/// reference can be handed to several services.
#[derive(Debug, Default)]
pub struct MemoryAuthorRepository {
    authors: RefCell<Vec<Author>>,
}

impl MemoryAuthorRepository {
    /// Creates a repository seeded with `authors` in the given order.
    pub fn new(authors: Vec<Author>) -> Self {
        Self {
            authors: RefCell::new(authors),
        }
    }

    /// Snapshot of all records in insertion order.
    pub fn records(&self) -> Vec<Author> {
        self.authors.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.authors.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.borrow().is_empty()
    }

    fn next_id(&self) -> RepoResult<AuthorId> {
        next_id(
            Entity::Author,
            self.authors.borrow().iter().map(|author| author.id),
        )
    }
}

impl AuthorRepository for MemoryAuthorRepository {
    fn add(&self, mut author: Author) -> RepoResult<Author> {
        if !author.has_id() {
            author.id = self.next_id()?;
        }
        self.authors.borrow_mut().push(author.clone());
        Ok(author)
    }

    fn get_by_id(&self, id: AuthorId) -> RepoResult<Author> {
        self.authors
            .borrow()
            .iter()
            .find(|author| author.id == id)
            .cloned()
            .ok_or_else(|| RepoError::not_found_id(Entity::Author, id))
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthorRepository, MemoryAuthorRepository};
    use crate::model::author::Author;
    use crate::repo::{Entity, LookupKey, RepoError};

    fn seeded() -> MemoryAuthorRepository {
        MemoryAuthorRepository::new(vec![
            Author::new(1, "Joe Jones"),
            Author::new(2, "Sue Sutherland"),
        ])
    }

    #[test]
    fn add_assigns_max_plus_one() {
        let repo = seeded();
        let added = repo.add(Author::unassigned("Mary Lamb")).unwrap();
        assert_eq!(added, Author::new(3, "Mary Lamb"));
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn add_to_empty_repo_starts_at_one() {
        let repo = MemoryAuthorRepository::default();
        assert!(repo.is_empty());
        assert_eq!(repo.add(Author::unassigned("Ann")).unwrap().id, 1);
        assert_eq!(repo.add(Author::unassigned("Bob")).unwrap().id, 2);
    }

    #[test]
    fn negative_id_is_treated_as_unassigned() {
        let repo = seeded();
        assert_eq!(repo.add(Author::new(-5, "Neg")).unwrap().id, 3);
    }

    #[test]
    fn explicit_id_is_kept() {
        let repo = seeded();
        let added = repo.add(Author::new(10, "Zed")).unwrap();
        assert_eq!(added.id, 10);
        assert_eq!(repo.add(Author::unassigned("Next")).unwrap().id, 11);
    }

    #[test]
    fn assignment_after_max_id_is_an_error_not_a_wrap() {
        let repo = MemoryAuthorRepository::new(vec![Author::new(i64::MAX, "Max")]);
        assert_eq!(
            repo.add(Author::unassigned("Mary Lamb")).unwrap_err(),
            RepoError::IdSpaceExhausted {
                entity: Entity::Author
            }
        );
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn get_by_id_misses_with_not_found() {
        let repo = seeded();
        assert_eq!(repo.get_by_id(2).unwrap().name, "Sue Sutherland");
        assert_eq!(
            repo.get_by_id(3).unwrap_err(),
            RepoError::NotFound {
                entity: Entity::Author,
                key: LookupKey::Id(3),
            }
        );
    }

    #[test]
    fn shared_reference_is_a_repository() {
        let repo = seeded();
        let by_ref: &dyn AuthorRepository = &repo;
        let via_blanket = &by_ref;
        assert_eq!(via_blanket.get_by_id(1).unwrap().name, "Joe Jones");
    }
}

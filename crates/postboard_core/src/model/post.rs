//! Post entities: the stored record and its resolved read model.
//!
//! # Invariants
//! - `StoredPost` keeps only the author reference, never author details.
//! - `Post::author().id == Post::author_id()` for every composite built by
//!   the post service.

use crate::model::author::{Author, AuthorId};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Repository-assigned post identity.
pub type PostId = i64;

/// Post record as owned by a post repository.
///
/// `author_id` is a plain foreign reference and is not checked for
/// existence when the record is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPost {
    pub id: PostId,
    pub author_id: AuthorId,
    pub title: String,
    pub body: String,
}

impl StoredPost {
    /// Creates a stored post with a known identity.
    pub fn new(
        id: PostId,
        author_id: AuthorId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author_id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Creates a stored post that asks the repository to assign a fresh identity.
    pub fn unassigned(
        author_id: AuthorId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::new(0, author_id, title, body)
    }

    /// Returns whether this record already carries a usable identity.
    pub fn has_id(&self) -> bool {
        self.id >= 1
    }
}

/// Read-time aggregate of a stored post and the author it references.
///
/// Serialized as `{ "id", "title", "body", "author": { .. } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    post: StoredPost,
    author: Author,
}

impl Post {
    /// Builds the composite. Callers are expected to pass the author
    /// referenced by `post.author_id`.
    pub fn new(post: StoredPost, author: Author) -> Self {
        Self { post, author }
    }

    pub fn id(&self) -> PostId {
        self.post.id
    }

    pub fn author_id(&self) -> AuthorId {
        self.post.author_id
    }

    pub fn title(&self) -> &str {
        &self.post.title
    }

    pub fn body(&self) -> &str {
        &self.post.body
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Underlying stored record.
    pub fn stored(&self) -> &StoredPost {
        &self.post
    }
}

// `author_id` is omitted: it is redundant next to the embedded author.
impl Serialize for Post {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Post", 4)?;
        state.serialize_field("id", &self.post.id)?;
        state.serialize_field("title", &self.post.title)?;
        state.serialize_field("body", &self.post.body)?;
        state.serialize_field("author", &self.author)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{Post, StoredPost};
    use crate::model::author::Author;

    #[test]
    fn accessors_read_through_to_parts() {
        let post = Post::new(
            StoredPost::new(4, 2, "Hello world", "body"),
            Author::new(2, "Sue Sutherland"),
        );
        assert_eq!(post.id(), 4);
        assert_eq!(post.author_id(), 2);
        assert_eq!(post.title(), "Hello world");
        assert_eq!(post.body(), "body");
        assert_eq!(post.author().name, "Sue Sutherland");
    }

    #[test]
    fn unassigned_post_uses_zero_id() {
        let post = StoredPost::unassigned(1, "Title", "Body");
        assert_eq!(post.id, 0);
        assert_eq!(post.author_id, 1);
        assert!(!post.has_id());
        assert!(StoredPost::new(1, 1, "Title", "Body").has_id());
    }
}

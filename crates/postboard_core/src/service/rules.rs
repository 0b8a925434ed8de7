//! Business rules applied by services before touching a repository.
//!
//! Lengths are counted in characters, not bytes.

use crate::repo::Entity;
use crate::service::error::ValidationError;

pub const MIN_AUTHOR_NAME_CHARS: usize = 3;
pub const MIN_POST_TITLE_CHARS: usize = 5;

pub(crate) fn check_author_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() < MIN_AUTHOR_NAME_CHARS {
        return Err(ValidationError::NameTooShort {
            name: name.to_string(),
            min_chars: MIN_AUTHOR_NAME_CHARS,
        });
    }
    Ok(())
}

pub(crate) fn check_post_title(title: &str) -> Result<(), ValidationError> {
    if title.chars().count() < MIN_POST_TITLE_CHARS {
        return Err(ValidationError::TitleTooShort {
            title: title.to_string(),
            min_chars: MIN_POST_TITLE_CHARS,
        });
    }
    Ok(())
}

pub(crate) fn check_lookup_id(entity: Entity, id: i64) -> Result<(), ValidationError> {
    if id < 1 {
        return Err(ValidationError::NonPositiveId { entity, id });
    }
    Ok(())
}

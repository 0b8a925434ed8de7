//! Error taxonomy shared by the author and post services.

use crate::repo::{Entity, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Business-rule violation in caller input. Nothing is written when one is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is shorter than the minimum character count.
    NameTooShort { name: String, min_chars: usize },
    /// Post title is shorter than the minimum character count.
    TitleTooShort { title: String, min_chars: usize },
    /// Identity lookups require an id of at least 1.
    NonPositiveId { entity: Entity, id: i64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort { name, min_chars } => write!(
                f,
                "author name must be at least {min_chars} characters long -- name: |{name}|"
            ),
            Self::TitleTooShort { title, min_chars } => write!(
                f,
                "post title must be at least {min_chars} characters long -- title: |{title}|"
            ),
            Self::NonPositiveId { entity, id } => {
                write!(f, "{entity} id must be at least 1 -- id: {id}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Service-level error returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required dependency was not supplied at construction.
    Configuration { dependency: &'static str },
    /// Caller input broke a business rule.
    Validation(ValidationError),
    /// Repository failure, passed through unchanged.
    Repo(RepoError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(RepoError::NotFound { .. }))
    }

    /// Entity whose repository reported a miss, if this is a not-found error.
    pub fn not_found_entity(&self) -> Option<Entity> {
        match self {
            Self::Repo(err @ RepoError::NotFound { .. }) => Some(err.entity()),
            _ => None,
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration { dependency } => write!(f, "{dependency} may not be absent"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Configuration { .. } => None,
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

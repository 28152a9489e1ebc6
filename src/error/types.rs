// src/error/types.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every settable field that carries a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    AuthorName,
    MagazineName,
    MagazineCategory,
    ArticleTitle,
    ArticleAuthor,
    ArticleMagazine,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::AuthorName => write!(f, "author name"),
            Field::MagazineName => write!(f, "magazine name"),
            Field::MagazineCategory => write!(f, "magazine category"),
            Field::ArticleTitle => write!(f, "article title"),
            Field::ArticleAuthor => write!(f, "article author"),
            Field::ArticleMagazine => write!(f, "article magazine"),
        }
    }
}

/// Category of a validation failure, independent of the field it hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    TypeMismatch,
    LengthOutOfRange,
    Empty,
}

/// Rejected construction or assignment.
///
/// Returned synchronously; the target object is not created or the field keeps
/// its prior value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} has the wrong shape: {reason}")]
    TypeMismatch { field: Field, reason: String },

    #[error("{field} must be between {min} and {max} characters (got {actual})")]
    LengthOutOfRange {
        field: Field,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("{field} cannot be empty")]
    Empty { field: Field },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::TypeMismatch { .. } => ValidationErrorKind::TypeMismatch,
            ValidationError::LengthOutOfRange { .. } => ValidationErrorKind::LengthOutOfRange,
            ValidationError::Empty { .. } => ValidationErrorKind::Empty,
        }
    }

    pub fn field(&self) -> Field {
        match self {
            ValidationError::TypeMismatch { field, .. }
            | ValidationError::LengthOutOfRange { field, .. }
            | ValidationError::Empty { field } => *field,
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

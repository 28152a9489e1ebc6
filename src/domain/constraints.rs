// src/domain/constraints.rs
//
// Declarative field constraints shared by every entity.
// Lengths are counted in chars, not bytes.

use crate::error::{Field, ValidationError, ValidationResult};

/// Rule a text field must satisfy on construction and on every assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextConstraint {
    /// Non-empty after trimming whitespace
    NonBlank,

    /// Inclusive char-count range
    Length { min: usize, max: usize },
}

pub const AUTHOR_NAME: TextConstraint = TextConstraint::NonBlank;
pub const MAGAZINE_NAME: TextConstraint = TextConstraint::Length { min: 2, max: 16 };
pub const MAGAZINE_CATEGORY: TextConstraint = TextConstraint::NonBlank;
pub const ARTICLE_TITLE: TextConstraint = TextConstraint::Length { min: 5, max: 50 };

/// An author is "contributing" to a magazine with strictly more articles than this
pub const CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE: usize = 2;

impl TextConstraint {
    pub fn check(&self, field: Field, value: &str) -> ValidationResult<()> {
        match *self {
            TextConstraint::NonBlank => {
                if value.trim().is_empty() {
                    return Err(ValidationError::Empty { field });
                }
            }
            TextConstraint::Length { min, max } => {
                let actual = value.chars().count();
                if !(min..=max).contains(&actual) {
                    return Err(ValidationError::LengthOutOfRange {
                        field,
                        min,
                        max,
                        actual,
                    });
                }
            }
        }
        Ok(())
    }
}

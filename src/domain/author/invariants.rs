use crate::domain::constraints::AUTHOR_NAME;
use crate::error::{Field, ValidationResult};

/// Name must be non-empty after trimming
pub fn validate_author_name(name: &str) -> ValidationResult<()> {
    AUTHOR_NAME.check(Field::AuthorName, name)
}

/// Author invariants:
///
/// 1. Name is non-blank
/// 2. Name never changes after construction (no setter exists)
/// 3. Identity (UUID) is immutable; equal names do not make equal authors
/// 4. Authors own no articles; they are discovered through the registry

// src/error/mod.rs
pub mod types;

pub use types::{Field, ValidationError, ValidationErrorKind, ValidationResult};

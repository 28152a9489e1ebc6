pub mod entity;
pub mod invariants;
mod queries;

pub use entity::Author;
pub use invariants::validate_author_name;

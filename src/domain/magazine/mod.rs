pub mod entity;
pub mod invariants;
mod queries;

pub use entity::Magazine;
pub use invariants::{validate_magazine_category, validate_magazine_name};

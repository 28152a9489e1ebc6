// src/domain/mod.rs
//
// Domain root: declares every entity module and re-exports its public API.
// Other modules import from `crate::domain::*`.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod article;
pub mod author;
pub mod constraints;
pub mod magazine;


// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Author Domain
pub use author::{validate_author_name, Author};

// Magazine Domain
pub use magazine::{validate_magazine_category, validate_magazine_name, Magazine};

// Article Domain
pub use article::{
    validate_article_links, validate_article_title, validate_author_link, validate_magazine_link,
    Article,
};

// Shared constraints
pub use constraints::{TextConstraint, CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE};

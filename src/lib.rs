// src/lib.rs
// Bylines - authors, magazines and the articles that link them
//
// Architecture:
// - Domain-centric: entities validate their own fields, strictly
// - Registry: one append-only list of articles is the only relationship store
// - Derived: every relationship query is recomputed from a registry snapshot
// - Observable: registry changes are published as typed events

pub mod domain;
pub mod error;
pub mod events;
pub mod registry;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_article_links,
    validate_article_title,
    validate_author_link,
    validate_author_name,
    validate_magazine_category,
    validate_magazine_link,
    validate_magazine_name,
    // Article
    Article,
    // Author
    Author,
    // Magazine
    Magazine,
    TextConstraint,
    CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{Field, ValidationError, ValidationErrorKind, ValidationResult};

// ============================================================================
// PUBLIC API - Registry & Events
// ============================================================================

pub use registry::ArticleRegistry;

pub use events::{
    ArticleReassigned, ArticleRegistered, DomainEvent, EventBus, EventLogEntry, Link,
    MagazineRevised, DEFAULT_EVENT_LOG_CAPACITY,
};

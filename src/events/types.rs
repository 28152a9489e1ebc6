// events/types.rs
//
// Domain events raised by the article registry.
// Each event is an immutable fact that has already happened.
//
// RULES:
// - Events are facts, not commands
// - Events carry ids and plain values, never entity handles
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Field;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// ARTICLE EVENTS
// ============================================================================

/// Emitted once per successful article construction, after the append
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRegistered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub article_id: Uuid,
    pub author_id: Uuid,
    pub magazine_id: Uuid,
    pub title: String,
    /// Zero-based index in registry order
    pub position: usize,
}

impl ArticleRegistered {
    pub fn new(
        article_id: Uuid,
        author_id: Uuid,
        magazine_id: Uuid,
        title: String,
        position: usize,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            article_id,
            author_id,
            magazine_id,
            title,
            position,
        }
    }
}

impl DomainEvent for ArticleRegistered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ArticleRegistered" }
}

/// Which side of an article was re-pointed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Link {
    Author,
    Magazine,
}

/// Emitted when an article's author or magazine is reassigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleReassigned {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub article_id: Uuid,
    pub link: Link,
    pub from: Uuid,
    pub to: Uuid,
}

impl ArticleReassigned {
    pub fn new(article_id: Uuid, link: Link, from: Uuid, to: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            article_id,
            link,
            from,
            to,
        }
    }
}

impl DomainEvent for ArticleReassigned {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ArticleReassigned" }
}

// ============================================================================
// MAGAZINE EVENTS
// ============================================================================

/// Emitted when a magazine's name or category is successfully reassigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagazineRevised {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub magazine_id: Uuid,
    pub field: Field,
    pub old_value: String,
    pub new_value: String,
}

impl MagazineRevised {
    pub fn new(magazine_id: Uuid, field: Field, old_value: String, new_value: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            magazine_id,
            field,
            old_value,
            new_value,
        }
    }
}

impl DomainEvent for MagazineRevised {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MagazineRevised" }
}

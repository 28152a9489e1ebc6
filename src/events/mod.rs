// src/events/mod.rs
//
// Registry event system - public API

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{ArticleReassigned, ArticleRegistered, Link, MagazineRevised};

pub use bus::{EventBus, EventLogEntry, DEFAULT_EVENT_LOG_CAPACITY};

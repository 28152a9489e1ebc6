// src/registry/mod.rs
//
// The article registry is the single source of truth for every
// author/magazine relationship. Entities never own back-collections;
// relationship queries filter a registry snapshot by identity.
//
// RULES:
// - Append only: no removal, reordering or deduplication
// - One append per successful Article construction
// - Reassigning an article's links never moves it

pub mod article_registry;

pub use article_registry::ArticleRegistry;

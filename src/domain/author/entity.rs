use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::invariants::validate_author_name;
use crate::domain::{Article, Magazine};
use crate::error::ValidationResult;
use crate::registry::ArticleRegistry;

/// A writer. Identity is the id; two authors with the same name are distinct.
///
/// Cheap to clone: clones are handles to the same author.
#[derive(Clone)]
pub struct Author {
    inner: Arc<AuthorInner>,
}

struct AuthorInner {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    registry: ArticleRegistry,
}

impl Author {
    /// Create an author bound to the process-wide registry
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Self::with_registry(&ArticleRegistry::global(), name)
    }

    /// Create an author whose articles live in `registry`
    pub fn with_registry(
        registry: &ArticleRegistry,
        name: impl Into<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_author_name(&name)?;

        Ok(Self {
            inner: Arc::new(AuthorInner {
                id: Uuid::new_v4(),
                name,
                created_at: Utc::now(),
                registry: registry.clone(),
            }),
        })
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Fixed at construction
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    pub fn registry(&self) -> &ArticleRegistry {
        &self.inner.registry
    }

    /// Write a new article for `magazine`. The article is registered on success.
    pub fn add_article(
        &self,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> ValidationResult<Article> {
        Article::new(self, magazine, title)
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Author {}

impl std::hash::Hash for Author {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl std::fmt::Debug for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Author")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .finish()
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.name)
    }
}

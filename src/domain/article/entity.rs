use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::invariants::{
    validate_article_links, validate_article_title, validate_author_link, validate_magazine_link,
};
use crate::domain::{Author, Magazine};
use crate::error::ValidationResult;
use crate::events::{ArticleReassigned, Link};
use crate::registry::ArticleRegistry;

/// The link between one author and one magazine.
///
/// Constructing an article registers it; there is no way to hold an
/// unregistered article. Clones are handles to the same article.
#[derive(Clone)]
pub struct Article {
    inner: Arc<ArticleInner>,
}

struct ArticleInner {
    id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    registry: ArticleRegistry,
    links: RwLock<ArticleLinks>,
}

struct ArticleLinks {
    author: Author,
    magazine: Magazine,
}

impl Article {
    /// Validate every field, then append to the author's registry.
    /// Nothing is registered when an error is returned.
    pub fn new(
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> ValidationResult<Self> {
        let title = title.into();
        validate_article_title(&title)?;
        validate_article_links(author, magazine)?;

        let article = Self {
            inner: Arc::new(ArticleInner {
                id: Uuid::new_v4(),
                title,
                created_at: Utc::now(),
                registry: author.registry().clone(),
                links: RwLock::new(ArticleLinks {
                    author: author.clone(),
                    magazine: magazine.clone(),
                }),
            }),
        };

        article.inner.registry.register(&article);
        Ok(article)
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Fixed at construction
    pub fn title(&self) -> &str {
        &self.inner.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    pub fn registry(&self) -> &ArticleRegistry {
        &self.inner.registry
    }

    pub fn author(&self) -> Author {
        self.read_links(|links| links.author.clone())
    }

    pub fn magazine(&self) -> Magazine {
        self.read_links(|links| links.magazine.clone())
    }

    pub(crate) fn author_id(&self) -> Uuid {
        self.read_links(|links| links.author.id())
    }

    pub(crate) fn magazine_id(&self) -> Uuid {
        self.read_links(|links| links.magazine.id())
    }

    /// Re-point to another author of the same registry.
    /// The article keeps its position in registry order.
    pub fn set_author(&self, author: &Author) -> ValidationResult<()> {
        if let Err(e) = validate_author_link(&self.inner.registry, author) {
            log::debug!("rejected author for article {}: {}", self.inner.id, e);
            return Err(e);
        }

        let previous = self.write_links(|links| {
            std::mem::replace(&mut links.author, author.clone()).id()
        });
        self.inner.registry.events().emit(ArticleReassigned::new(
            self.inner.id,
            Link::Author,
            previous,
            author.id(),
        ));
        Ok(())
    }

    /// Re-point to another magazine of the same registry.
    pub fn set_magazine(&self, magazine: &Magazine) -> ValidationResult<()> {
        if let Err(e) = validate_magazine_link(&self.inner.registry, magazine) {
            log::debug!("rejected magazine for article {}: {}", self.inner.id, e);
            return Err(e);
        }

        let previous = self.write_links(|links| {
            std::mem::replace(&mut links.magazine, magazine.clone()).id()
        });
        self.inner.registry.events().emit(ArticleReassigned::new(
            self.inner.id,
            Link::Magazine,
            previous,
            magazine.id(),
        ));
        Ok(())
    }

    fn read_links<T>(&self, f: impl FnOnce(&ArticleLinks) -> T) -> T {
        f(&self.inner.links.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn write_links<T>(&self, f: impl FnOnce(&mut ArticleLinks) -> T) -> T {
        f(&mut self
            .inner
            .links
            .write()
            .unwrap_or_else(PoisonError::into_inner))
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Article {}

impl std::hash::Hash for Article {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl std::fmt::Debug for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (author, magazine) = self.read_links(|links| (links.author.id(), links.magazine.id()));
        f.debug_struct("Article")
            .field("id", &self.inner.id)
            .field("title", &self.inner.title)
            .field("author", &author)
            .field("magazine", &magazine)
            .finish()
    }
}

impl std::fmt::Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.title)
    }
}

// src/registry/article_registry.rs

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::domain::{Article, Author, Magazine};
use crate::events::{ArticleRegistered, EventBus};

static GLOBAL: Lazy<ArticleRegistry> = Lazy::new(ArticleRegistry::new);

/// Append-only, insertion-ordered collection of every article constructed
/// against it.
///
/// Cloning yields another handle to the same registry. Queries never iterate
/// under the lock: they take a snapshot first, so a concurrent append is either
/// fully visible or not at all.
#[derive(Clone)]
pub struct ArticleRegistry {
    articles: Arc<RwLock<Vec<Article>>>,
    events: EventBus,
}

impl ArticleRegistry {
    /// A fresh, empty registry independent of every other one.
    ///
    /// Lifetime: the registry keeps its articles alive, articles keep their
    /// author and magazine alive, and those keep the registry alive. Once an
    /// article is registered the whole group stays allocated for the rest of
    /// the process, even after every handle is dropped. Entities stay usable
    /// while any one of them is held, and nothing is ever unregistered.
    /// Create registries for long-lived scopes, not per request.
    pub fn new() -> Self {
        Self {
            articles: Arc::new(RwLock::new(Vec::new())),
            events: EventBus::new(),
        }
    }

    /// Process-wide registry. Created empty on first use, never torn down.
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    /// Whether both handles point at the same underlying registry
    pub fn same_registry(&self, other: &ArticleRegistry) -> bool {
        Arc::ptr_eq(&self.articles, &other.articles)
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.articles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every registered article, in registry order
    pub fn snapshot(&self) -> Vec<Article> {
        self.articles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn articles_by_author(&self, author: &Author) -> Vec<Article> {
        self.filtered(|article| article.author_id() == author.id())
    }

    pub fn articles_by_magazine(&self, magazine: &Magazine) -> Vec<Article> {
        self.filtered(|article| article.magazine_id() == magazine.id())
    }

    fn filtered<P>(&self, predicate: P) -> Vec<Article>
    where
        P: Fn(&Article) -> bool,
    {
        self.snapshot().into_iter().filter(|a| predicate(a)).collect()
    }

    /// Append a fully validated article. Called exactly once per successful
    /// `Article::new`.
    pub(crate) fn register(&self, article: &Article) -> usize {
        let position = {
            let mut articles = self
                .articles
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            articles.push(article.clone());
            articles.len() - 1
        };

        log::debug!(
            "registered article {} '{}' at position {}",
            article.id(),
            article.title(),
            position
        );

        self.events.emit(ArticleRegistered::new(
            article.id(),
            article.author_id(),
            article.magazine_id(),
            article.title().to_string(),
            position,
        ));

        position
    }

    pub fn contains(&self, article_id: Uuid) -> bool {
        self.articles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|article| article.id() == article_id)
    }
}

impl Default for ArticleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Articles point back at their authors, so print counts only
impl std::fmt::Debug for ArticleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleRegistry")
            .field("articles", &self.len())
            .finish()
    }
}

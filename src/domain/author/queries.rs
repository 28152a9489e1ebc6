// Derived queries over the registry. Recomputed on every call.

use std::collections::HashSet;

use super::entity::Author;
use crate::domain::{Article, Magazine};

impl Author {
    /// Articles written by this author, in registry order
    pub fn articles(&self) -> Vec<Article> {
        self.registry().articles_by_author(self)
    }

    /// Distinct magazines this author has written for, in first-appearance order
    pub fn magazines(&self) -> Vec<Magazine> {
        let mut seen = HashSet::new();
        self.articles()
            .into_iter()
            .map(|article| article.magazine())
            .filter(|magazine| seen.insert(magazine.id()))
            .collect()
    }

    /// Distinct categories across `magazines()`, or `None` with no articles
    pub fn topic_areas(&self) -> Option<Vec<String>> {
        let magazines = self.magazines();
        if magazines.is_empty() {
            return None;
        }

        let mut seen = HashSet::new();
        Some(
            magazines
                .into_iter()
                .map(|magazine| magazine.category())
                .filter(|category| seen.insert(category.clone()))
                .collect(),
        )
    }
}

// Derived queries over the registry. Recomputed on every call.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use super::entity::Magazine;
use crate::domain::constraints::CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE;
use crate::domain::{Article, Author};

impl Magazine {
    /// Articles published in this magazine, in registry order
    pub fn articles(&self) -> Vec<Article> {
        self.registry().articles_by_magazine(self)
    }

    /// Distinct authors of `articles()`, in first-appearance order
    pub fn contributors(&self) -> Vec<Author> {
        let mut seen = HashSet::new();
        self.articles()
            .into_iter()
            .map(|article| article.author())
            .filter(|author| seen.insert(author.id()))
            .collect()
    }

    /// Titles in registry order, or `None` when nothing has been published
    pub fn article_titles(&self) -> Option<Vec<String>> {
        let titles: Vec<String> = self
            .articles()
            .iter()
            .map(|article| article.title().to_string())
            .collect();

        if titles.is_empty() {
            None
        } else {
            Some(titles)
        }
    }

    /// Authors with more than two articles here, in first-appearance order.
    /// `None` rather than an empty list when nobody qualifies.
    pub fn contributing_authors(&self) -> Option<Vec<Author>> {
        let mut order = Vec::new();
        let mut counts: HashMap<Uuid, usize> = HashMap::new();

        for article in self.articles() {
            let author = article.author();
            let count = counts.entry(author.id()).or_insert(0);
            if *count == 0 {
                order.push(author);
            }
            *count += 1;
        }

        let prolific: Vec<Author> = order
            .into_iter()
            .filter(|author| counts[&author.id()] > CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE)
            .collect();

        if prolific.is_empty() {
            None
        } else {
            Some(prolific)
        }
    }
}

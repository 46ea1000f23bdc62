use chrono::{DateTime, Utc};

use crate::domain::Article;

/// Articles listed under one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    pub articles: Vec<Article>,
    /// The article request for this category failed and `articles` is a
    /// substituted empty list.
    pub failed: bool,
}

/// Ordered mapping from category name to its articles.
///
/// Built once per aggregation run and never mutated afterwards. Category
/// order follows the category listing; article order follows the server.
#[derive(Debug, Clone)]
pub struct CategoryFeed {
    entries: Vec<CategoryEntry>,
    pub fetched_at: DateTime<Utc>,
}

impl CategoryFeed {
    /// Build a feed from per-category outcomes, keeping the first
    /// occurrence of a repeated category name.
    pub fn from_entries(entries: impl IntoIterator<Item = CategoryEntry>) -> Self {
        let mut unique: Vec<CategoryEntry> = Vec::new();
        for entry in entries {
            if unique.iter().any(|e| e.name == entry.name) {
                continue;
            }
            unique.push(entry);
        }

        Self {
            entries: unique,
            fetched_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&[Article]> {
        self.entries
            .iter()
            .find(|e| e.name == category)
            .map(|e| e.articles.as_slice())
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn failed_categories(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.failed)
            .map(|e| e.name.as_str())
            .collect()
    }

    pub fn article_count(&self) -> usize {
        self.entries.iter().map(|e| e.articles.len()).sum()
    }
}

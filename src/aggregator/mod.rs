//! Concurrent collection of every category's article list.
//!
//! ```text
//! list_categories ─┬─ list_articles(c1) ─┐
//!                  ├─ list_articles(c2) ─┼─ join ─→ CategoryFeed ─→ watch
//!                  └─ list_articles(cN) ─┘
//! ```
//!
//! Only the category listing can fail an aggregation. A failing category is
//! recorded as empty and the rest of the feed is built regardless.

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Semaphore};

use crate::app::Result;
use crate::client::FeedClient;
use crate::domain::{CategoryEntry, CategoryFeed};

pub const DEFAULT_WORKERS: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Maximum concurrent per-category requests (default: 8)
    pub workers: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

/// The published aggregation result.
#[derive(Debug, Clone)]
pub enum FeedState {
    /// No feed has been produced yet.
    Loading,
    Ready(Arc<CategoryFeed>),
    /// The very first aggregation failed; there is nothing to show.
    Failed(String),
}

impl FeedState {
    pub fn feed(&self) -> Option<&Arc<CategoryFeed>> {
        match self {
            FeedState::Ready(feed) => Some(feed),
            _ => None,
        }
    }
}

pub struct Aggregator {
    client: Arc<dyn FeedClient + Send + Sync>,
    semaphore: Arc<Semaphore>,
    state: watch::Sender<FeedState>,
}

impl Aggregator {
    pub fn new(client: Arc<dyn FeedClient + Send + Sync>) -> Self {
        Self::with_workers(client, DEFAULT_WORKERS)
    }

    pub fn with_workers(client: Arc<dyn FeedClient + Send + Sync>, workers: usize) -> Self {
        let (state, _) = watch::channel(FeedState::Loading);
        Self {
            client,
            semaphore: Arc::new(Semaphore::new(workers.max(1))),
            state,
        }
    }

    /// Build a complete feed: one category listing, then every category's
    /// articles concurrently.
    pub async fn aggregate(&self) -> Result<CategoryFeed> {
        let categories = self.client.list_categories().await?;
        tracing::debug!("Aggregating {} categories", categories.len());

        let mut handles = Vec::with_capacity(categories.len());
        for category in &categories {
            let client = self.client.clone();
            let semaphore = self.semaphore.clone();
            let category = category.clone();

            handles.push(tokio::spawn(async move {
                // The semaphore is owned by the aggregator and never closed.
                let _permit = semaphore.acquire_owned().await.ok();
                client.list_articles(&category).await
            }));
        }

        let outcomes = join_all(handles).await;

        let entries = categories
            .into_iter()
            .zip(outcomes)
            .map(|(name, outcome)| match outcome {
                Ok(Ok(articles)) => {
                    tracing::debug!("{} articles for {}", articles.len(), name);
                    CategoryEntry {
                        name,
                        articles,
                        failed: false,
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!("Failed to fetch articles for {}: {}", name, e);
                    CategoryEntry {
                        name,
                        articles: Vec::new(),
                        failed: true,
                    }
                }
                Err(e) => {
                    tracing::error!("Task join error for {}: {}", name, e);
                    CategoryEntry {
                        name,
                        articles: Vec::new(),
                        failed: true,
                    }
                }
            });

        let feed = CategoryFeed::from_entries(entries);
        tracing::info!(
            "Aggregated {} articles across {} categories ({} failed)",
            feed.article_count(),
            feed.len(),
            feed.failed_categories().len()
        );
        Ok(feed)
    }

    /// Run [`aggregate`](Self::aggregate) and publish the outcome.
    ///
    /// A failure leaves an already published feed in place and only marks
    /// the state as failed when no feed exists yet.
    pub async fn refresh(&self) -> Result<Arc<CategoryFeed>> {
        match self.aggregate().await {
            Ok(feed) => {
                let feed = Arc::new(feed);
                self.state.send_replace(FeedState::Ready(feed.clone()));
                Ok(feed)
            }
            Err(e) => {
                tracing::error!("Aggregation failed: {}", e);
                let message = e.to_string();
                self.state.send_if_modified(|state| match state {
                    FeedState::Ready(_) => false,
                    _ => {
                        *state = FeedState::Failed(message);
                        true
                    }
                });
                Err(e)
            }
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// The most recently published feed, if any.
    pub fn latest(&self) -> Option<Arc<CategoryFeed>> {
        self.state.borrow().feed().cloned()
    }
}

use std::sync::Arc;

use tokio::sync::watch;

use crate::client::FeedClient;
use crate::domain::state::SUMMARY_FAILED;
use crate::domain::{Article, SelectionState, SummaryState};
use crate::session::cell::{Generation, StateCell, Versioned};

/// Tracks the selected article and the lifecycle of its summary.
///
/// Selecting an article always starts over at `Loading`; a summary that
/// arrives for an article that is no longer selected is ignored.
pub struct SelectionMachine {
    client: Arc<dyn FeedClient + Send + Sync>,
    cell: StateCell<SelectionState>,
}

impl SelectionMachine {
    pub fn new(client: Arc<dyn FeedClient + Send + Sync>) -> Self {
        Self {
            client,
            cell: StateCell::new(SelectionState::NoSelection),
        }
    }

    /// Select `article` and start fetching its summary.
    pub fn select(&self, article: Article) -> Generation {
        tracing::debug!("Selected article: {}", article.title);

        let client = self.client.clone();
        let link = article.link.clone();
        let loaded = article.clone();

        self.cell.replace_then(
            SelectionState::Selected {
                article,
                summary: SummaryState::Loading,
            },
            async move {
                let summary = match client.fetch_summary(&link).await {
                    Ok(text) => SummaryState::Success(text),
                    Err(e) => {
                        tracing::warn!("Failed to load summary for {}: {}", link, e);
                        SummaryState::Error(SUMMARY_FAILED.to_string())
                    }
                };
                SelectionState::Selected {
                    article: loaded,
                    summary,
                }
            },
        )
    }

    pub fn current(&self) -> SelectionState {
        self.cell.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<Versioned<SelectionState>> {
        self.cell.subscribe()
    }
}

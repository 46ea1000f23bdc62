use std::sync::Arc;

use tokio::sync::watch;

use crate::client::FeedClient;
use crate::domain::state::MEANING_FAILED;
use crate::domain::LookupState;
use crate::session::cell::{Generation, StateCell, Versioned};

/// Characters stripped from both ends of a token before it is looked up.
pub const TRIMMED_PUNCTUATION: [char; 6] = [',', '.', '?', '!', ':', ';'];

/// Strip [`TRIMMED_PUNCTUATION`] from both ends of `token`.
pub fn normalize_word(token: &str) -> &str {
    token.trim_matches(|c| TRIMMED_PUNCTUATION.contains(&c))
}

/// Holds at most one word-definition lookup.
pub struct LookupMachine {
    client: Arc<dyn FeedClient + Send + Sync>,
    cell: StateCell<Option<LookupState>>,
}

impl LookupMachine {
    pub fn new(client: Arc<dyn FeedClient + Send + Sync>) -> Self {
        Self {
            client,
            cell: StateCell::new(None),
        }
    }

    /// Look up the definition of `token`.
    ///
    /// Returns `None` without touching the state when nothing is left of the
    /// token after normalization.
    pub fn lookup(&self, token: &str) -> Option<Generation> {
        let word = normalize_word(token);
        if word.is_empty() {
            return None;
        }
        let word = word.to_string();
        tracing::debug!("Looking up {:?}", word);

        let client = self.client.clone();
        let key = word.clone();

        let generation = self
            .cell
            .replace_then(Some(LookupState::loading(word)), async move {
                let meaning = match client.fetch_definition(&key).await {
                    Ok(meaning) => meaning,
                    Err(e) => {
                        tracing::warn!("Failed to fetch meaning of {:?}: {}", key, e);
                        MEANING_FAILED.to_string()
                    }
                };
                Some(LookupState::resolved(key, meaning))
            });

        Some(generation)
    }

    /// Close the current lookup, pending or not.
    pub fn dismiss(&self) -> Generation {
        self.cell.replace(None)
    }

    pub fn current(&self) -> Option<LookupState> {
        self.cell.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<Versioned<Option<LookupState>>> {
        self.cell.subscribe()
    }
}

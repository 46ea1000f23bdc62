use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::aggregator::Aggregator;
use crate::app::error::Result;
use crate::client::{FeedClient, HttpFeedClient};
use crate::config::Config;
use crate::domain::CategoryFeed;
use crate::session::{LookupMachine, SelectionMachine};

/// Wires the client to the components built on top of it.
pub struct AppContext {
    pub client: Arc<dyn FeedClient + Send + Sync>,
    pub aggregator: Arc<Aggregator>,
    pub selection: SelectionMachine,
    pub lookup: LookupMachine,
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        let client: Arc<dyn FeedClient + Send + Sync> =
            Arc::new(HttpFeedClient::new(&config.api)?);
        Ok(Self::with_client(client, config.aggregator.workers))
    }

    pub fn with_client(client: Arc<dyn FeedClient + Send + Sync>, workers: usize) -> Self {
        let aggregator = Arc::new(Aggregator::with_workers(client.clone(), workers));
        let selection = SelectionMachine::new(client.clone());
        let lookup = LookupMachine::new(client.clone());

        Self {
            client,
            aggregator,
            selection,
            lookup,
        }
    }

    /// Start an aggregation in the background.
    ///
    /// The feed is published through the aggregator; the handle only
    /// reports how the run ended.
    pub fn spawn_refresh(&self) -> JoinHandle<Result<Arc<CategoryFeed>>> {
        let aggregator = self.aggregator.clone();
        tokio::spawn(async move { aggregator.refresh().await })
    }
}

//! Access to the remote news service.
//!
//! Every call is a single attempt; failures are returned to the caller as
//! they happened.

mod config;
pub mod http_client;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http_client::HttpFeedClient;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Article;

#[async_trait]
pub trait FeedClient {
    /// Names of every category the service knows about.
    async fn list_categories(&self) -> Result<Vec<String>>;

    /// Articles for one category.
    ///
    /// A non-OK status yields an empty list rather than an error.
    async fn list_articles(&self, category: &str) -> Result<Vec<Article>>;

    /// Summary text for the article behind `link`.
    async fn fetch_summary(&self, link: &str) -> Result<String>;

    /// Definition text for a single word.
    async fn fetch_definition(&self, word: &str) -> Result<String>;
}

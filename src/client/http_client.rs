use async_trait::async_trait;
use html_escape::decode_html_entities;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use url::Url;

use crate::app::{QuickfeedError, Result};
use crate::client::{ClientConfig, FeedClient};
use crate::domain::Article;

pub struct HttpFeedClient {
    client: Client,
    base_url: Url,
}

impl HttpFeedClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(QuickfeedError::Config(format!(
                "Base URL cannot hold paths: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Resolve `segments` below the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn categories_url(&self) -> Url {
        self.endpoint(&["api", "categories"])
    }

    fn news_url(&self, category: &str) -> Url {
        self.endpoint(&["api", "news", category])
    }

    fn scrape_url(&self, link: &str) -> Url {
        let mut url = self.endpoint(&["api", "scrape"]);
        url.query_pairs_mut().append_pair("url", link);
        url
    }

    fn define_url(&self, word: &str) -> Url {
        let mut url = self.endpoint(&["api", "define"]);
        url.query_pairs_mut().append_pair("word", word);
        url
    }

    async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Status {} for {}", response.status(), response.url());
        Ok(response)
    }

    /// Fetch an endpoint that must answer 200 and pull one string field out
    /// of its JSON object body.
    async fn fetch_text_field(&self, url: Url, field: &str) -> Result<String> {
        let response = self.get(url).await?;
        if response.status() != StatusCode::OK {
            return Err(QuickfeedError::Remote {
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        extract_text_field(&body, field)
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn list_categories(&self) -> Result<Vec<String>> {
        let response = self.get(self.categories_url()).await?;
        if response.status() != StatusCode::OK {
            return Err(QuickfeedError::Remote {
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        let categories: Vec<String> = serde_json::from_slice(&body)?;
        tracing::info!("Fetched {} categories", categories.len());
        Ok(categories)
    }

    async fn list_articles(&self, category: &str) -> Result<Vec<Article>> {
        let response = self.get(self.news_url(category)).await?;
        if response.status() != StatusCode::OK {
            tracing::debug!("Non-OK status for {}: {}", category, response.status());
            return Ok(Vec::new());
        }

        let body = response.bytes().await?;
        let articles: Vec<Article> = serde_json::from_slice(&body)?;
        tracing::debug!("Fetched {} articles for {}", articles.len(), category);
        Ok(articles)
    }

    async fn fetch_summary(&self, link: &str) -> Result<String> {
        self.fetch_text_field(self.scrape_url(link), "summary").await
    }

    async fn fetch_definition(&self, word: &str) -> Result<String> {
        self.fetch_text_field(self.define_url(word), "meaning").await
    }
}

fn extract_text_field(body: &[u8], field: &str) -> Result<String> {
    let value: Value = serde_json::from_slice(body)?;
    let text = value
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| QuickfeedError::Decode(format!("missing string field `{}`", field)))?;

    Ok(decode_html_entities(text).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ErrorKind;

    fn client(base: &str) -> HttpFeedClient {
        HttpFeedClient::new(&ClientConfig::default().with_base_url(base)).unwrap()
    }

    #[test]
    fn test_endpoint_paths() {
        let c = client("https://news.example.com");
        assert_eq!(
            c.categories_url().as_str(),
            "https://news.example.com/api/categories"
        );
        assert_eq!(
            c.news_url("tech").as_str(),
            "https://news.example.com/api/news/tech"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let c = client("https://news.example.com/v1/");
        assert_eq!(
            c.news_url("world").as_str(),
            "https://news.example.com/v1/api/news/world"
        );
    }

    #[test]
    fn test_category_segment_is_encoded() {
        let c = client("https://news.example.com");
        assert_eq!(
            c.news_url("science/env").as_str(),
            "https://news.example.com/api/news/science%2Fenv"
        );
    }

    #[test]
    fn test_scrape_link_is_encoded() {
        let c = client("https://news.example.com");
        let url = c.scrape_url("https://www.bbc.co.uk/news/a?b=1&c=2");
        assert_eq!(
            url.as_str(),
            "https://news.example.com/api/scrape?url=https%3A%2F%2Fwww.bbc.co.uk%2Fnews%2Fa%3Fb%3D1%26c%3D2"
        );
    }

    #[test]
    fn test_define_url() {
        let c = client("https://news.example.com");
        assert_eq!(
            c.define_url("tariff").as_str(),
            "https://news.example.com/api/define?word=tariff"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpFeedClient::new(&ClientConfig::default().with_base_url("not a url"))
            .err()
            .unwrap();
        assert!(matches!(err, QuickfeedError::InvalidUrl(_)));

        let err = HttpFeedClient::new(&ClientConfig::default().with_base_url("mailto:a@b.c"))
            .err()
            .unwrap();
        assert!(matches!(err, QuickfeedError::Config(_)));
    }

    #[test]
    fn test_extract_text_field() {
        let text = extract_text_field(br#"{"summary":" Markets &amp; rates ","x":1}"#, "summary")
            .unwrap();
        assert_eq!(text, "Markets & rates");
    }

    #[test]
    fn test_extract_missing_field_is_decode_error() {
        let err = extract_text_field(br#"{"other":"x"}"#, "summary").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);

        let err = extract_text_field(br#"{"summary":42}"#, "summary").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);

        let err = extract_text_field(b"<html>", "summary").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}

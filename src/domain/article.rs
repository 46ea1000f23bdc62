use std::hash::{Hash, Hasher};

use html_escape::decode_html_entities;
use serde::{Deserialize, Deserializer, Serialize};

/// A single news entry as listed by the remote service.
///
/// Two articles are the same article when their title and link match;
/// the remaining fields are display data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(deserialize_with = "deserialize_decoded")]
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub published: String,
    pub category: String,
    pub link: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        published: impl Into<String>,
        category: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            thumbnail: None,
            published: published.into(),
            category: category.into(),
            link: link.into(),
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.link == other.link
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.link.hash(state);
    }
}

fn deserialize_decoded<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(decode_html_entities(&s).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = r#"{
            "title": "Rates held",
            "published": "Mon, 01 Jan 2024",
            "category": "business",
            "link": "https://example.com/a",
            "author": "someone",
            "score": 3
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Rates held");
        assert_eq!(article.thumbnail, None);
    }

    #[test]
    fn test_decode_thumbnail_present_and_null() {
        let json = r#"{"title":"t","thumbnail":"https://img/x.jpg","published":"p","category":"c","link":"l"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.thumbnail.as_deref(), Some("https://img/x.jpg"));

        let json = r#"{"title":"t","thumbnail":null,"published":"p","category":"c","link":"l"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.thumbnail, None);
    }

    #[test]
    fn test_decode_missing_required_field_fails() {
        let json = r#"{"title":"t","published":"p","category":"c"}"#;
        assert!(serde_json::from_str::<Article>(json).is_err());
    }

    #[test]
    fn test_title_entities_decoded() {
        let json = r#"{"title":"Q&amp;A: what&#39;s next","published":"p","category":"c","link":"l"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Q&A: what's next");
    }

    #[test]
    fn test_identity_is_title_and_link() {
        let a = Article::new("Title", "today", "tech", "https://example.com/1");
        let b = Article::new("Title", "yesterday", "world", "https://example.com/1")
            .with_thumbnail("https://img");
        let c = Article::new("Title", "today", "tech", "https://example.com/2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_title_fallback() {
        let a = Article::new("  ", "p", "c", "l");
        assert_eq!(a.display_title(), "(Untitled)");
    }
}

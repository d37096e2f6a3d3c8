//! Crawl records as delivered by the website-content-crawler dataset

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// One crawled page from the crawler dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlRecord {
    /// URL of the crawled page
    #[serde(default)]
    pub url: Option<String>,

    /// Pointer to the stored HTML of the page
    #[serde(default, rename = "htmlUrl")]
    pub html_url: Option<String>,

    /// Metadata the crawler extracted from the page
    #[serde(default)]
    pub metadata: RecordMetadata,
}

/// Page metadata extracted by the crawler
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Title of the page
    #[serde(default)]
    pub title: Option<String>,

    /// Description of the page
    #[serde(default)]
    pub description: Option<String>,
}

impl CrawlRecord {
    /// Create a record with a URL and an HTML pointer
    pub fn new(url: impl Into<String>, html_url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            html_url: Some(html_url.into()),
            metadata: RecordMetadata::default(),
        }
    }

    /// Set the metadata title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    /// Set the metadata description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = Some(description.into());
        self
    }
}

/// Parse dataset items from either a JSON array or JSON Lines
pub fn parse_dataset(content: &str) -> Result<Vec<CrawlRecord>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    debug!("Dataset is not a JSON array, parsing as JSON Lines");
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str::<CrawlRecord>(line).map_err(Error::from))
        .collect()
}

/// Load dataset items from a file
pub async fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<CrawlRecord>> {
    let content = tokio::fs::read_to_string(path).await?;
    parse_dataset(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        let content = r#"[
            {
                "url": "https://example.com/guides/a",
                "htmlUrl": "https://api.example.com/v2/key-value-stores/s1/records/a",
                "metadata": {"title": "A", "description": "About A", "languageCode": "en"},
                "crawl": {"depth": 1}
            },
            {"url": "https://example.com/guides/b"}
        ]"#;

        let records = parse_dataset(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].metadata.title.as_deref(), Some("A"));
        assert_eq!(
            records[0].html_url.as_deref(),
            Some("https://api.example.com/v2/key-value-stores/s1/records/a")
        );
        assert!(records[1].html_url.is_none());
        assert_eq!(records[1].metadata, RecordMetadata::default());
    }

    #[test]
    fn test_parse_json_lines() {
        let content = "{\"url\": \"https://example.com/a\", \"htmlUrl\": \"a\"}\n\n{\"htmlUrl\": \"b\"}\n";

        let records = parse_dataset(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], CrawlRecord::new("https://example.com/a", "a"));
        assert!(records[1].url.is_none());
    }

    #[test]
    fn test_parse_invalid_dataset() {
        assert!(parse_dataset("{not json}").is_err());
    }

    #[tokio::test]
    async fn test_load_dataset_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        tokio::fs::write(&path, r#"[{"url": "https://example.com", "htmlUrl": "root"}]"#)
            .await
            .unwrap();

        let records = load_dataset(&path).await.unwrap();
        assert_eq!(records, vec![CrawlRecord::new("https://example.com", "root")]);
    }
}

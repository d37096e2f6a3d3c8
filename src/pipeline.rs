//! End-to-end pipeline from a crawl record stream to `llms.txt` text

use futures::{Stream, StreamExt};
use tracing::{info, instrument};

use crate::aggregator::{AggregatedDocument, Aggregator};
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::record::CrawlRecord;
use crate::store::HtmlStore;

/// Aggregate a record stream into a finished document.
///
/// Records are consumed strictly in order, one HTML lookup at a time.
///
/// # Errors
///
/// - [`Error::MissingInput`] when `start_url` is absent or blank
/// - [`Error::InvalidStartUrl`] when `start_url` cannot be parsed
/// - [`Error::EmptyResult`] when the stream has no usable record
#[instrument(skip(records, store, config))]
pub async fn build_document<R, S>(
    start_url: Option<&str>,
    records: R,
    store: &S,
    config: &PipelineConfig,
) -> Result<AggregatedDocument>
where
    R: Stream<Item = CrawlRecord>,
    S: HtmlStore,
{
    let start_url = start_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| Error::MissingInput("start URL is required".to_string()))?;

    let mut aggregator = Aggregator::new(start_url)?
        .with_details(config.details.clone())
        .with_section_titles(config.section_titles.clone());
    if let Some(title) = &config.title {
        aggregator = aggregator.with_title(title.clone());
    }

    info!("Aggregating crawl records for {}", start_url);

    let mut records = std::pin::pin!(records);
    while let Some(record) = records.next().await {
        aggregator.ingest(record, store).await;
    }

    aggregator.finish(config.section_min_links)
}

/// Run the whole pipeline and return the rendered `llms.txt` text
pub async fn run_pipeline<R, S>(
    start_url: Option<&str>,
    records: R,
    store: &S,
    config: &PipelineConfig,
) -> Result<String>
where
    R: Stream<Item = CrawlRecord>,
    S: HtmlStore,
{
    let document = build_document(start_url, records, store, config).await?;
    Ok(document.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryHtmlStore;
    use futures::stream;

    #[tokio::test]
    async fn test_missing_start_url() {
        let store = MemoryHtmlStore::new();
        let config = PipelineConfig::default();

        for start_url in [None, Some(""), Some("   ")] {
            let result =
                run_pipeline(start_url, stream::empty::<CrawlRecord>(), &store, &config).await;
            assert!(matches!(result, Err(Error::MissingInput(_))));
        }
    }

    #[tokio::test]
    async fn test_unparseable_start_url() {
        let store = MemoryHtmlStore::new();
        let result = run_pipeline(
            Some("docs.example.com"),
            stream::empty::<CrawlRecord>(),
            &store,
            &PipelineConfig::default(),
        )
        .await;

        assert!(matches!(result, Err(Error::InvalidStartUrl { .. })));
    }

    #[tokio::test]
    async fn test_empty_stream_fails() {
        let store = MemoryHtmlStore::new();
        let result = run_pipeline(
            Some("https://example.com"),
            stream::empty::<CrawlRecord>(),
            &store,
            &PipelineConfig::default(),
        )
        .await;

        assert!(matches!(result, Err(Error::EmptyResult { skipped: 0 })));
    }

    #[tokio::test]
    async fn test_all_skipped_stream_fails() {
        let store = MemoryHtmlStore::new();
        let records = vec![
            CrawlRecord {
                url: Some("https://example.com/a".to_string()),
                ..Default::default()
            },
            CrawlRecord {
                html_url: Some("b".to_string()),
                ..Default::default()
            },
        ];

        let result = run_pipeline(
            Some("https://example.com"),
            stream::iter(records),
            &store,
            &PipelineConfig::default(),
        )
        .await;

        assert!(matches!(result, Err(Error::EmptyResult { skipped: 2 })));
    }

    #[tokio::test]
    async fn test_config_overrides() {
        let store = MemoryHtmlStore::new();
        let config = PipelineConfig::builder()
            .title("Example Docs")
            .details("Everything about Example.")
            .section_min_links(1)
            .build();
        let records = vec![CrawlRecord::new("https://example.com/guides/a", "a").with_title("A")];

        let output = run_pipeline(
            Some("https://example.com"),
            stream::iter(records),
            &store,
            &config,
        )
        .await
        .unwrap();

        assert_eq!(
            output,
            "# Example Docs\n\n\
             Everything about Example.\n\n\
             ## /guides\n\n\
             - [A](https://example.com/guides/a)\n\n"
        );
    }
}

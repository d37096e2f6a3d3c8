//! # Document Aggregator
//!
//! Builds a [`Document`] from a sequence of crawl records in three phases:
//!
//! 1. **Ingest**: [`Aggregator::ingest`] takes one record at a time. The root
//!    page (the one matching the start URL) only provides the document
//!    description. Every other usable page becomes a link in the section of its
//!    URL directory.
//! 2. **Cleanup**: [`Aggregator::finish`] consumes the aggregator, rejects an
//!    empty result and folds sections with too few links into the `/` index.
//! 3. **Done**: the returned [`AggregatedDocument`] is read-only.
//!
//! Records without a URL or an HTML pointer are skipped with a warning.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::document::{Document, Link, Section};
use crate::error::{Error, Result};
use crate::extract::{description_from_html, heading_from_html, is_description_suitable};
use crate::record::CrawlRecord;
use crate::render::render;
use crate::sections::{INDEX_SECTION, INDEX_SECTION_TITLE, SectionTitles, section_key};
use crate::store::HtmlStore;
use crate::url_utils::{hostname, hostname_path, normalize_url};

/// Why a record was left out of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Record has no `url`
    MissingUrl,
    /// Record has no `htmlUrl`
    MissingHtmlUrl,
    /// Record URL cannot be parsed
    InvalidUrl,
}

/// What happened to an ingested record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingested {
    /// Record is the root page and set the document description
    Root,
    /// Record matched the root page again and was ignored
    DuplicateRoot,
    /// Record was added as a link to the given section
    Link {
        /// Section key the link was added to
        section: String,
    },
    /// Record was skipped
    Skipped(SkipReason),
}

/// Counters collected during ingest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Records that were usable, root included
    pub processed: usize,
    /// Records that were skipped
    pub skipped: usize,
    /// Whether the root page was seen
    pub root_found: bool,
}

/// Accumulates crawl records into a document
#[derive(Debug)]
pub struct Aggregator {
    start_url: String,
    document: Document,
    section_titles: Option<SectionTitles>,
    stats: IngestStats,
}

impl Aggregator {
    /// Create an aggregator for a crawl that started at `start_url`.
    ///
    /// The document title defaults to the start URL's hostname.
    pub fn new(start_url: &str) -> Result<Self> {
        let normalized = normalize_url(start_url).map_err(|source| Error::InvalidStartUrl {
            url: start_url.to_string(),
            source,
        })?;
        let title = hostname(start_url).unwrap_or_else(|| normalized.clone());

        Ok(Self {
            start_url: normalized,
            document: Document::new(title),
            section_titles: None,
            stats: IngestStats::default(),
        })
    }

    /// Override the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.document.title = title.into();
        self
    }

    /// Set the free-text details block
    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.document.details = details;
        self
    }

    /// Use a lookup table for section titles
    pub fn with_section_titles(mut self, section_titles: Option<SectionTitles>) -> Self {
        self.section_titles = section_titles;
        self
    }

    /// Counters so far
    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// The document as built so far
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Add one crawl record to the document
    #[instrument(skip(self, record, store), fields(url = record.url.as_deref().unwrap_or("")))]
    pub async fn ingest<S: HtmlStore>(&mut self, record: CrawlRecord, store: &S) -> Ingested {
        let (url, html_url) = match (record.url, record.html_url) {
            (None, _) => return self.skip(SkipReason::MissingUrl),
            (Some(_), None) => return self.skip(SkipReason::MissingHtmlUrl),
            (Some(url), Some(html_url)) => (url, html_url),
        };

        let parsed =
            normalize_url(&url).and_then(|normalized| Ok((normalized, section_key(&url)?)));
        let (normalized, key) = match parsed {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Invalid URL '{}' in dataset item: {}", url, e);
                return self.skip(SkipReason::InvalidUrl);
            }
        };

        self.stats.processed += 1;
        let metadata = record.metadata;

        if normalized == self.start_url {
            if self.stats.root_found {
                debug!("Ignoring repeated root page {}", url);
                return Ingested::DuplicateRoot;
            }
            self.stats.root_found = true;

            let html = match metadata.description {
                Some(_) => None,
                None => fetch_page_html(store, &html_url).await,
            };
            self.document.description = resolve_description(metadata.description, html.as_deref());
            return Ingested::Root;
        }

        // Stored HTML is only read for a missing description; a missing title
        // alone falls back to the URL.
        let html = match metadata.description {
            Some(_) => None,
            None => fetch_page_html(store, &html_url).await,
        };

        let description = resolve_description(metadata.description, html.as_deref());
        let title = metadata
            .title
            .filter(|title| !title.trim().is_empty())
            .or_else(|| {
                html.as_deref()
                    .and_then(heading_from_html)
                    .filter(|heading| !heading.is_empty())
            })
            .unwrap_or_else(|| hostname_path(&url));

        let section_titles = self.section_titles.as_ref();
        self.document
            .sections
            .entry(key.clone())
            .or_insert_with(|| {
                let title = match section_titles {
                    Some(titles) => titles.lookup(&key),
                    None => key.clone(),
                };
                Section::new(title)
            })
            .links
            .push(Link::new(url, title, description));

        Ingested::Link { section: key }
    }

    /// Finish ingest, merge small sections into the index and freeze the document.
    ///
    /// Fails with [`Error::EmptyResult`] when no record was usable.
    pub fn finish(mut self, section_min_links: usize) -> Result<AggregatedDocument> {
        if self.stats.processed == 0 {
            return Err(Error::EmptyResult {
                skipped: self.stats.skipped,
            });
        }
        if !self.stats.root_found {
            warn!("Root page {} not found in dataset", self.start_url);
        }

        let culled = cleanup_sections(&mut self.document.sections, section_min_links);
        if !culled.is_empty() {
            debug!("Merged sections into index: {:?}", culled);
        }

        info!(
            "Aggregated {} records ({} skipped) into {} sections",
            self.stats.processed,
            self.stats.skipped,
            self.document.sections.len()
        );

        Ok(AggregatedDocument {
            document: self.document,
            stats: self.stats,
        })
    }

    fn skip(&mut self, reason: SkipReason) -> Ingested {
        match reason {
            SkipReason::MissingUrl => warn!("Skipping dataset item without a url"),
            SkipReason::MissingHtmlUrl => warn!("Skipping dataset item without an htmlUrl"),
            SkipReason::InvalidUrl => {}
        }
        self.stats.skipped += 1;
        Ingested::Skipped(reason)
    }
}

/// A finished document, no longer open to changes
#[derive(Debug, Clone)]
pub struct AggregatedDocument {
    document: Document,
    stats: IngestStats,
}

impl AggregatedDocument {
    /// The aggregated document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Counters collected during ingest
    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// Render the document as `llms.txt` text
    pub fn render(&self) -> String {
        render(&self.document)
    }

    /// Take the document out
    pub fn into_document(self) -> Document {
        self.document
    }
}

/// Move links of under-populated sections into the index section.
///
/// Every section other than `/` with fewer than `min_links` links is removed
/// and its links are appended to `/`, which is created as "Index" if needed.
/// Sections are merged in ascending key order, each keeping its own link order.
/// Returns the keys of the removed sections.
pub fn cleanup_sections(sections: &mut BTreeMap<String, Section>, min_links: usize) -> Vec<String> {
    let culled: Vec<String> = sections
        .iter()
        .filter(|(key, section)| key.as_str() != INDEX_SECTION && section.links.len() < min_links)
        .map(|(key, _)| key.clone())
        .collect();

    if culled.is_empty() {
        return culled;
    }

    let mut moved = Vec::new();
    for key in &culled {
        if let Some(section) = sections.remove(key) {
            moved.extend(section.links);
        }
    }

    sections
        .entry(INDEX_SECTION.to_string())
        .or_insert_with(|| Section::new(INDEX_SECTION_TITLE))
        .links
        .extend(moved);

    culled
}

async fn fetch_page_html<S: HtmlStore>(store: &S, pointer: &str) -> Option<String> {
    match store.fetch_html(pointer).await {
        Ok(Some(html)) => Some(html),
        Ok(None) => {
            warn!("No stored HTML for {}", pointer);
            None
        }
        Err(e) => {
            warn!("Failed to fetch HTML for {}: {}", pointer, e);
            None
        }
    }
}

fn resolve_description(metadata: Option<String>, html: Option<&str>) -> Option<String> {
    let description = metadata.or_else(|| html.and_then(description_from_html));
    if is_description_suitable(description.as_deref()) {
        description
    } else {
        None
    }
}

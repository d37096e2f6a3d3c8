//! # HTML Store
//!
//! The crawler keeps the raw HTML of every page in a separate store and only
//! hands out a pointer (`htmlUrl`) in its dataset. The aggregator falls back to
//! that HTML when the dataset metadata lacks a description or a title.
//!
//! ## Key Components
//!
//! - `HtmlStore`: the lookup seam used by the aggregator
//! - `FsHtmlStore`: HTML files in a local directory, e.g. a downloaded key-value store
//! - `HttpHtmlStore`: fetches the pointer directly over HTTP
//! - `MemoryHtmlStore`: in-memory map, handy for tests and embedding
//!
//! A pointer that resolves to nothing is `Ok(None)`, not an error.

mod error;
mod fs;
mod http;

pub use error::StoreError;
pub use fs::FsHtmlStore;
pub use http::HttpHtmlStore;

use std::collections::HashMap;
use std::future::Future;

/// Lookup of stored page HTML by pointer
pub trait HtmlStore {
    /// Fetch the HTML behind a pointer, `None` if the store has no such record
    fn fetch_html(
        &self,
        pointer: &str,
    ) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;
}

/// Extract the record key from an HTML pointer.
///
/// Pointers usually look like `https://api.apify.com/v2/key-value-stores/<id>/records/<key>`;
/// everything after the last `records/` is the key. Pointers without that
/// marker are used as-is.
pub fn record_key(pointer: &str) -> &str {
    pointer.rsplit("records/").next().unwrap_or(pointer)
}

/// In-memory HTML store keyed by record key
#[derive(Debug, Clone, Default)]
pub struct MemoryHtmlStore {
    records: HashMap<String, String>,
}

impl MemoryHtmlStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert HTML under a pointer or record key
    pub fn insert(&mut self, pointer: &str, html: impl Into<String>) {
        self.records
            .insert(record_key(pointer).to_string(), html.into());
    }

    /// Builder-style variant of [`MemoryHtmlStore::insert`]
    pub fn with_record(mut self, pointer: &str, html: impl Into<String>) -> Self {
        self.insert(pointer, html);
        self
    }
}

impl HtmlStore for MemoryHtmlStore {
    async fn fetch_html(&self, pointer: &str) -> Result<Option<String>, StoreError> {
        Ok(self.records.get(record_key(pointer)).cloned())
    }
}

//! # llmstxt - `llms.txt` generation from website crawls
//!
//! This crate turns the dataset of a website-content-crawler run into a single
//! `llms.txt` summary: a title, an optional description of the site, and
//! sections of links grouped by URL directory.
//!
//! ## Features
//!
//! - Typed crawl record contract with JSON and JSON Lines dataset loading
//! - Description lookup from crawler metadata, falling back to the stored HTML
//! - Path-based sectioning with optional section title lookup
//! - Small sections folded into a catch-all index
//! - Deterministic, diff-stable rendering
//! - Pluggable HTML stores (filesystem, HTTP, in-memory)
//!
//! ## Example
//!
//! ```rust,no_run
//! use futures::stream;
//! use llmstxt::{CrawlRecord, MemoryHtmlStore, PipelineConfig, run_pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryHtmlStore::new()
//!         .with_record("home", r#"<meta name="description" content="Example docs">"#);
//!
//!     let records = vec![
//!         CrawlRecord::new("https://example.com/", "home"),
//!         CrawlRecord::new("https://example.com/guides/setup", "setup").with_title("Setup"),
//!         CrawlRecord::new("https://example.com/guides/deploy", "deploy").with_title("Deploy"),
//!     ];
//!
//!     let config = PipelineConfig::default();
//!     let output = run_pipeline(
//!         Some("https://example.com"),
//!         stream::iter(records),
//!         &store,
//!         &config,
//!     )
//!     .await?;
//!
//!     println!("{}", output);
//!     Ok(())
//! }
//! ```

mod error;

pub mod aggregator;
pub mod config;
pub mod document;
pub mod extract;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod sections;
pub mod store;
pub mod url_utils;

pub use aggregator::{AggregatedDocument, Aggregator, IngestStats, cleanup_sections};
pub use config::PipelineConfig;
pub use document::{Document, Link, Section};
pub use error::Error;
pub use pipeline::{build_document, run_pipeline};
pub use record::{CrawlRecord, RecordMetadata, load_dataset};
pub use render::render;
pub use sections::SectionTitles;
pub use store::{FsHtmlStore, HtmlStore, HttpHtmlStore, MemoryHtmlStore, StoreError};

/// Re-export of types module for public use
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::error::Result;
}

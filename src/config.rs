//! # Pipeline Configuration Module
//!
//! Configuration for turning a crawl dataset into an `llms.txt` document. The
//! values are fixed once built and passed explicitly to the pipeline.
//!
//! ## Key Components
//!
//! - `PipelineConfig`: section threshold and document overrides
//! - `PipelineConfigBuilder`: builder pattern implementation for easier configuration

use crate::sections::SectionTitles;

/// Default minimum number of links a section needs to be kept on its own
pub const DEFAULT_SECTION_MIN_LINKS: usize = 2;

/// Configuration for the aggregation pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Sections with fewer links are merged into the index section
    pub section_min_links: usize,

    /// Document title, the start URL's hostname when unset
    pub title: Option<String>,

    /// Free text rendered below the description
    pub details: Option<String>,

    /// Display titles for section paths
    pub section_titles: Option<SectionTitles>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            section_min_links: DEFAULT_SECTION_MIN_LINKS,
            title: None,
            details: None,
            section_titles: None,
        }
    }
}

/// Builder for PipelineConfig
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// Set the minimum number of links per section
    pub fn section_min_links(mut self, section_min_links: usize) -> Self {
        self.config.section_min_links = section_min_links;
        self
    }

    /// Override the document title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Set the free-text details block
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.config.details = Some(details.into());
        self
    }

    /// Set the section title lookup table
    pub fn section_titles(mut self, section_titles: SectionTitles) -> Self {
        self.config.section_titles = Some(section_titles);
        self
    }

    /// Build the configuration
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}

impl PipelineConfig {
    /// Create a new builder
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }
}

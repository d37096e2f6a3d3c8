//! # Section Classification
//!
//! Pages are grouped by the directory portion of their URL path, so
//! `https://example.com/guides/setup` and `https://example.com/guides/deploy`
//! both land in the `/guides` section. The `/` key is reserved for the index.
//!
//! Section headings default to the key itself. A [`SectionTitles`] table can
//! supply nicer labels; lookups fall back to the closest ancestor path that
//! has an entry.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::url_utils::url_path_dir;

/// Key of the index section
pub const INDEX_SECTION: &str = "/";

/// Title given to the index section when cleanup has to create it
pub const INDEX_SECTION_TITLE: &str = "Index";

/// Classify a page URL into its section key
pub fn section_key(url: &str) -> std::result::Result<String, url::ParseError> {
    url_path_dir(url)
}

/// Lookup table from section path to display title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionTitles {
    titles: HashMap<String, String>,
}

impl SectionTitles {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a title for a section path
    pub fn with_title(mut self, path: impl Into<String>, title: impl Into<String>) -> Self {
        self.titles.insert(path.into(), title.into());
        self
    }

    /// Load a table from a JSON object file mapping paths to titles
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Resolve the display title for a section key.
    ///
    /// Tries the exact key, then each ancestor path up to and including `/`.
    /// Returns the key unchanged when nothing matches.
    pub fn lookup(&self, key: &str) -> String {
        if key.is_empty() {
            return String::new();
        }

        let mut candidate = key;
        loop {
            if let Some(title) = self.titles.get(candidate) {
                return title.clone();
            }
            if candidate == INDEX_SECTION {
                break;
            }
            candidate = match candidate.trim_end_matches('/').rsplit_once('/') {
                Some(("", _)) | None => INDEX_SECTION,
                Some((parent, _)) => parent,
            };
        }

        key.to_string()
    }
}

impl FromIterator<(String, String)> for SectionTitles {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            titles: iter.into_iter().collect(),
        }
    }
}

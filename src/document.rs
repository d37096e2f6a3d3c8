//! Data model of an `llms.txt` document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single page referenced from a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// URL of the page
    pub url: String,

    /// Link text
    pub title: String,

    /// Short description of the page
    pub description: Option<String>,
}

impl Link {
    /// Create a new link
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description,
        }
    }
}

/// A titled group of links sharing a URL directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading of the section
    pub title: String,

    /// Links in crawl order
    pub links: Vec<Link>,
}

impl Section {
    /// Create an empty section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            links: Vec::new(),
        }
    }
}

/// The whole `llms.txt` document
///
/// Sections are keyed by directory path and kept in a `BTreeMap`, so iterating
/// them always yields ascending key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level heading, usually the site hostname
    pub title: String,

    /// Description of the site taken from the root page
    pub description: Option<String>,

    /// Free text rendered below the description
    pub details: Option<String>,

    /// Sections keyed by directory path
    pub sections: BTreeMap<String, Section>,
}

impl Document {
    /// Create an empty document with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            details: None,
            sections: BTreeMap::new(),
        }
    }

    /// Total number of links across all sections
    pub fn link_count(&self) -> usize {
        self.sections.values().map(|section| section.links.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_link_count() {
        let mut document = Document::new("example.com");
        assert_eq!(document.link_count(), 0);

        let mut guides = Section::new("/guides");
        guides.links.push(Link::new("https://example.com/guides/a", "A", None));
        guides.links.push(Link::new("https://example.com/guides/b", "B", None));
        document.sections.insert("/guides".to_string(), guides);

        let mut index = Section::new("Index");
        index.links.push(Link::new(
            "https://example.com/about",
            "About",
            Some("Who we are".to_string()),
        ));
        document.sections.insert("/".to_string(), index);

        assert_eq!(document.link_count(), 3);
        assert_eq!(
            document.sections.keys().collect::<Vec<_>>(),
            vec!["/", "/guides"]
        );
    }

    #[test]
    fn test_document_json_shape() {
        let document = Document::new("example.com");
        let json = serde_json::to_value(&document).unwrap();

        assert_eq!(json["title"], "example.com");
        assert!(json["description"].is_null());
        assert!(json["details"].is_null());
        assert!(json["sections"].as_object().unwrap().is_empty());
    }
}

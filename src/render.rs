//! Rendering of a [`Document`] into `llms.txt` text
//!
//! Output layout:
//!
//! ```text
//! # {title}
//!
//! > {description}
//!
//! {details}
//!
//! ## {section title}
//!
//! - [{link title}]({url}): {link description}
//!
//! ```
//!
//! Sections are written in ascending key order, links in the order they were
//! aggregated. The description, details and link description parts are only
//! written when they are non-empty after trimming.

use crate::document::Document;

/// Render a document as `llms.txt` text
pub fn render(document: &Document) -> String {
    let mut out = format!("# {}\n\n", document.title.trim());

    if let Some(description) = non_empty(document.description.as_deref()) {
        out.push_str(&format!("> {}\n\n", description));
    }

    if let Some(details) = non_empty(document.details.as_deref()) {
        out.push_str(&format!("{}\n\n", details));
    }

    for section in document.sections.values() {
        out.push_str(&format!("## {}\n\n", section.title.trim()));

        for link in &section.links {
            out.push_str(&format!("- [{}]({})", link.title.trim(), link.url.trim()));
            if let Some(description) = non_empty(link.description.as_deref()) {
                out.push_str(&format!(": {}", description));
            }
            out.push('\n');
        }

        out.push('\n');
    }

    out
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}

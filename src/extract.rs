//! Description and heading extraction from stored page HTML

use scraper::{Html, Selector};

/// Meta tag names checked for a page description, in order of preference
const DESCRIPTION_META_NAMES: [&str; 2] = ["description", "Description"];

/// Check if a description can be used in the `llms.txt` output.
///
/// Some sites put a whole document into the description meta tag, so anything
/// spanning more than one line is rejected.
pub fn is_description_suitable(description: Option<&str>) -> bool {
    match description {
        Some(description) => !description.contains('\n'),
        None => false,
    }
}

/// Extract the page description from a `description` meta tag.
///
/// The tag name is matched case-sensitively: `description` first, then `Description`.
/// Returns `None` when neither tag exists or the tag carries no content.
pub fn description_from_html(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("meta[name]").ok()?;

    let meta = DESCRIPTION_META_NAMES.iter().find_map(|name| {
        document
            .select(&selector)
            .find(|element| element.value().attr("name") == Some(*name))
    })?;

    meta.value()
        .attr("content")
        .filter(|content| !content.is_empty())
        .map(str::to_string)
}

/// Extract the text of the first `<h1>` element in document order
pub fn heading_from_html(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h1").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

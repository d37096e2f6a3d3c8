//! URL helpers used for root detection and path-based section grouping

use url::Url;

/// Normalize a URL by removing trailing slashes from its path.
///
/// Only the path is touched: scheme, host, port, query and fragment are kept
/// exactly as written, so two URLs differing only by a trailing slash
/// normalize to the same string. `Url::parse` is only used for validation.
/// Normalizing an already normalized URL returns it unchanged.
pub fn normalize_url(url: &str) -> Result<String, url::ParseError> {
    Url::parse(url)?;
    let (start, end) = path_span(url);

    Ok(format!(
        "{}{}{}",
        &url[..start],
        url[start..end].trim_end_matches('/'),
        &url[end..]
    ))
}

/// Get the directory path of a URL.
///
/// The URL is normalized first, then the last path segment is dropped.
/// Returns `/` when nothing is left.
pub fn url_path_dir(url: &str) -> Result<String, url::ParseError> {
    let normalized = normalize_url(url)?;
    let (start, end) = path_span(&normalized);

    let dir = match normalized[start..end].rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    };

    if dir.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(dir.to_string())
    }
}

/// Byte range of the path component within a URL string
fn path_span(url: &str) -> (usize, usize) {
    let after_scheme = url.find(':').map_or(0, |colon| colon + 1);

    let start = match url[after_scheme..].strip_prefix("//") {
        Some(authority) => {
            let authority_len = authority.find(['/', '?', '#']).unwrap_or(authority.len());
            after_scheme + 2 + authority_len
        }
        None => after_scheme,
    };
    let end = url[start..]
        .find(['?', '#'])
        .map_or(url.len(), |offset| start + offset);

    (start, end)
}

/// Hostname and path without the scheme, e.g. `example.com/path`.
///
/// Falls back to the original string when the URL has no host or cannot be parsed.
pub fn hostname_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => format!("{}{}", host, parsed.path()),
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}

/// Hostname of a URL, if it has one
pub fn hostname(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
}

//! HTML store backed by a local directory

use std::io;
use std::path::{Component, Path, PathBuf};

use tokio::fs;
use tracing::debug;

use super::{HtmlStore, StoreError, record_key};

/// Reads stored HTML from files in a directory.
///
/// A pointer resolves to `<root>/<key>`, or `<root>/<key>.html` when the bare
/// key does not exist. This matches the layout of a key-value store exported
/// to disk.
#[derive(Debug, Clone)]
pub struct FsHtmlStore {
    root: PathBuf,
}

impl FsHtmlStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate file paths for a pointer
    fn candidate_paths(&self, pointer: &str) -> Result<[PathBuf; 2], StoreError> {
        let key = record_key(pointer);
        let relative = Path::new(key);

        let is_plain = !key.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !is_plain {
            return Err(StoreError::InvalidPointer(pointer.to_string()));
        }

        Ok([
            self.root.join(relative),
            self.root.join(format!("{}.html", key)),
        ])
    }
}

impl HtmlStore for FsHtmlStore {
    async fn fetch_html(&self, pointer: &str) -> Result<Option<String>, StoreError> {
        for path in self.candidate_paths(pointer)? {
            match fs::read_to_string(&path).await {
                Ok(html) => {
                    debug!("Loaded HTML from {}", path.display());
                    return Ok(Some(html));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(StoreError::Io(e)),
            }
        }

        Ok(None)
    }
}

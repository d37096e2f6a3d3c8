//! HTML store that fetches pointers over HTTP

use reqwest::StatusCode;
use tracing::{debug, instrument};

use super::{HtmlStore, StoreError};

/// Fetches stored HTML by requesting the pointer URL.
///
/// The crawler's `htmlUrl` is a public record URL of its key-value store, so a
/// plain GET returns the page HTML.
#[derive(Debug, Clone, Default)]
pub struct HttpHtmlStore {
    client: reqwest::Client,
}

impl HttpHtmlStore {
    /// Create a store with a default HTTP client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that uses the given HTTP client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HtmlStore for HttpHtmlStore {
    #[instrument(skip(self))]
    async fn fetch_html(&self, pointer: &str) -> Result<Option<String>, StoreError> {
        let response = self.client.get(pointer).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("No stored HTML at {}", pointer);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                pointer: pointer.to_string(),
            });
        }

        Ok(Some(response.text().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_html() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/key-value-stores/s1/records/home")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(r#"<meta name="description" content="Home page">"#)
            .create_async()
            .await;

        let store = HttpHtmlStore::new();
        let url = format!("{}/v2/key-value-stores/s1/records/home", server.url());
        let html = store.fetch_html(&url).await.unwrap();

        assert_eq!(
            html.as_deref(),
            Some(r#"<meta name="description" content="Home page">"#)
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_not_found_is_none() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/records/missing")
            .with_status(404)
            .create_async()
            .await;

        let store = HttpHtmlStore::new();
        let html = store
            .fetch_html(&format!("{}/records/missing", server.url()))
            .await
            .unwrap();

        assert!(html.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/records/broken")
            .with_status(500)
            .create_async()
            .await;

        let store = HttpHtmlStore::new();
        let result = store
            .fetch_html(&format!("{}/records/broken", server.url()))
            .await;

        match result {
            Err(StoreError::Status { status, .. }) => assert_eq!(status, 500),
            other => panic!("Expected Status error, got {:?}", other),
        }
    }
}

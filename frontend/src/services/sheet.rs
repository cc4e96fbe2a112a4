//! Fetches the listings sheet from the browser.

use gloo_net::http::Request;
use listings::{ingest, DocumentSource, FallbackPolicy, FetchError, FetchResult, Ingested};

use crate::types::AppResult;

/// The published sheet's CSV export, fetched with `fetch()`.
#[derive(Clone, Debug)]
pub struct SheetSource {
    url: String,
}

impl SheetSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DocumentSource for SheetSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> FetchResult<Vec<u8>> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                url: self.url.clone(),
            });
        }

        if let Some(content_type) = response.headers().get("content-type") {
            if content_type.starts_with("text/html") {
                return Err(FetchError::UnexpectedContent(content_type));
            }
        }

        response
            .binary()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

/// One ingestion cycle against the configured sheet.
pub async fn load_listings(url: String, policy: FallbackPolicy) -> AppResult<Ingested> {
    let source = SheetSource::new(url);
    Ok(ingest(&source, policy).await?)
}

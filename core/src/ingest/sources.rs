//! Native document sources: the sheet over HTTP, or a local export.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use super::DocumentSource;
use crate::config::Config;
use crate::error::{FetchError, FetchResult};

const USER_AGENT: &str = concat!("listings/", env!("CARGO_PKG_VERSION"));

/// GET of the spreadsheet CSV export.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &Config) -> FetchResult<Self> {
        Self::new(config.sheet_url.clone(), config.timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> FetchResult<Vec<u8>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        // A private sheet redirects to a sign-in page with 200 OK
        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if content_type.starts_with("text/html") {
                return Err(FetchError::UnexpectedContent(content_type.to_string()));
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

/// A CSV export saved on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> FetchResult<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request with `status`, `content_type` and `body`.
    async fn serve_once(status: &'static str, content_type: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                content_type,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/export?format=csv", addr)
    }

    #[tokio::test]
    async fn test_file_source_reads_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "id,address\n1,הגולן 5\n").unwrap();

        let source = FileSource::new(file.path());
        let bytes = source.fetch().await.unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap(), "id,address\n1,הגולן 5\n");
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.csv"));

        assert!(matches!(source.fetch().await, Err(FetchError::Io(_))));
    }

    #[tokio::test]
    async fn test_http_source_unreachable_host() {
        // Nothing listens on the local discard port
        let source = HttpSource::new("http://127.0.0.1:9/export.csv", Duration::from_secs(2)).unwrap();

        assert!(matches!(source.fetch().await, Err(FetchError::Transport(_))));
        assert_eq!(source.url(), "http://127.0.0.1:9/export.csv");
    }

    #[tokio::test]
    async fn test_http_source_reads_csv() {
        let url = serve_once("200 OK", "text/csv; charset=utf-8", "id,address\n1,a\n").await;
        let source = HttpSource::new(url, Duration::from_secs(5)).unwrap();

        assert_eq!(source.fetch().await.unwrap(), b"id,address\n1,a\n".to_vec());
    }

    #[tokio::test]
    async fn test_http_source_rejects_sign_in_page() {
        let url = serve_once("200 OK", "text/html; charset=utf-8", "<html>Sign in</html>").await;
        let source = HttpSource::new(url, Duration::from_secs(5)).unwrap();

        match source.fetch().await {
            Err(FetchError::UnexpectedContent(content_type)) => {
                assert!(content_type.starts_with("text/html"))
            }
            other => panic!("expected UnexpectedContent, got {:?}", other.map(|b| b.len())),
        }
    }

    #[tokio::test]
    async fn test_http_source_error_status() {
        let url = serve_once("404 Not Found", "text/plain", "missing").await;
        let source = HttpSource::new(url.clone(), Duration::from_secs(5)).unwrap();

        match source.fetch().await {
            Err(FetchError::Status { status, url: failed }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("expected Status, got {:?}", other.map(|b| b.len())),
        }
    }
}

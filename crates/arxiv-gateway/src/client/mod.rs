//! arXiv API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Atom feed parsing for search and id lookups
//! - Size-capped PDF downloads with page-wise text extraction
//!
//! No caching, rate limiting or retries: every call goes straight to arXiv.

use reqwest::Client;
use url::Url;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::feed;
use crate::gateway::{FullTextSource, PaperIndex};
use crate::models::PaperRecord;
use crate::pdf;

/// arXiv export API and PDF host client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client.
    client: Client,

    /// Endpoint URLs and limits.
    config: Config,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("arxiv-gateway/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self { client, config })
    }

    /// Run an Atom query and parse every entry.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status, or malformed XML.
    pub async fn query(&self, params: &[(&str, String)]) -> ClientResult<Vec<PaperRecord>> {
        let url = Url::parse_with_params(&self.config.api_url, params)?;
        tracing::debug!(%url, "arXiv query");

        let response = self.client.get(url).send().await?;
        let response = Self::handle_response(response).await?;
        let body = response.text().await?;

        Ok(feed::parse_feed(&body)?)
    }

    /// Download the PDF for `paper`, enforcing the configured byte cap.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status, or an oversized body.
    pub async fn fetch_pdf(&self, paper: &str) -> ClientResult<Vec<u8>> {
        let url = self.config.pdf_download_url(paper);
        let limit = self.config.max_pdf_bytes;
        tracing::debug!(%url, "Downloading PDF");

        let response = self.client.get(&url).send().await?;
        let mut response = Self::handle_response(response).await?;

        if let Some(size) = response.content_length() {
            if size > limit {
                return Err(ClientError::PdfTooLarge { size, limit });
            }
        }

        // Chunked bodies carry no length up front; stop at the first chunk past the cap
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            let size = (body.len() + chunk.len()) as u64;
            if size > limit {
                return Err(ClientError::PdfTooLarge { size, limit });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }

    /// Handle response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let resource = response.url().to_string();
        match status.as_u16() {
            404 => Err(ClientError::not_found(resource)),
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

#[async_trait::async_trait]
impl PaperIndex for ArxivClient {
    async fn search(
        &self,
        text: &str,
        start: u32,
        max_results: u32,
    ) -> ClientResult<Vec<PaperRecord>> {
        self.query(&[
            ("search_query", format!("all:{text}")),
            ("start", start.to_string()),
            ("max_results", max_results.to_string()),
        ])
        .await
    }

    async fn lookup(&self, id_list: &str) -> ClientResult<Vec<PaperRecord>> {
        self.query(&[("id_list", id_list.to_string())]).await
    }
}

#[async_trait::async_trait]
impl FullTextSource for ArxivClient {
    async fn pages(&self, paper: &str) -> ClientResult<Vec<String>> {
        let bytes = self.fetch_pdf(paper).await?;
        pdf::extract_pages(bytes).await
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient")
            .field("api_url", &self.config.api_url)
            .field("pdf_base_url", &self.config.pdf_base_url)
            .finish_non_exhaustive()
    }
}

//! Configuration for the arXiv gateway.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv export API query endpoint (Atom responses).
    pub const QUERY_URL: &str = "http://export.arxiv.org/api/query";

    /// Base URL PDFs are downloaded from.
    pub const PDF_BASE_URL: &str = "https://arxiv.org/pdf";

    /// Base URL used for the `pdf_url` field of every paper record.
    ///
    /// Stays fixed even when downloads are pointed elsewhere.
    pub const PUBLIC_PDF_BASE_URL: &str = "https://arxiv.org/pdf";

    /// Atom namespace of the export API feed.
    pub const ATOM_NS: &[u8] = b"http://www.w3.org/2005/Atom";

    /// Page size for `/search`. Not configurable.
    pub const SEARCH_PAGE_SIZE: u32 = 10;

    /// Request timeout (large PDFs take a while).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Largest PDF `/full` will download (50 MiB).
    pub const MAX_PDF_BYTES: u64 = 50 * 1024 * 1024;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Default listen port.
    pub const DEFAULT_PORT: u16 = 5001;
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// arXiv query endpoint (overridable for mock servers).
    pub api_url: String,

    /// Base URL for PDF downloads, without trailing slash.
    pub pdf_base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Byte cap for downloaded PDFs.
    pub max_pdf_bytes: u64,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Config {
    /// Create a configuration pointing at the public arXiv endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::QUERY_URL.to_string(),
            pdf_base_url: api::PDF_BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_pdf_bytes: api::MAX_PDF_BYTES,
            static_dir: PathBuf::from("."),
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/api/query", base_url),
            pdf_base_url: format!("{}/pdf", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_pdf_bytes: api::MAX_PDF_BYTES,
            static_dir: PathBuf::from("."),
        }
    }

    /// Download URL of the PDF for `paper`.
    ///
    /// The identifier is interpolated as-is.
    #[must_use]
    pub fn pdf_download_url(&self, paper: &str) -> String {
        format!("{}/{}.pdf", self.pdf_base_url.trim_end_matches('/'), paper)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

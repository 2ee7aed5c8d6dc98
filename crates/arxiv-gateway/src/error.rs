//! Error types for the arXiv gateway.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors while reading an Atom feed.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    /// XML syntax or encoding error
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Document contains no root element
    #[error("document has no root element")]
    MissingRoot,

    /// Document ended before an element was closed
    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(String),
}

/// Errors from the outbound collaborators (arXiv API, PDF host, extractor).
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Outbound URL could not be built
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Atom response could not be parsed
    #[error("Failed to parse feed: {0}")]
    Feed(#[from] FeedError),

    /// PDF text extraction failed
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    /// PDF exceeds the configured byte cap
    #[error("PDF is {size} bytes, limit is {limit}")]
    PdfTooLarge {
        /// Declared or received size
        size: u64,
        /// Configured cap
        limit: u64,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Create a PDF extraction error.
    #[must_use]
    pub fn pdf(message: impl Into<String>) -> Self {
        Self::Pdf(message.into())
    }
}

/// Errors returned by the HTTP handlers.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Error from an outbound collaborator
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Identifier lookup matched no entry
    #[error("No entry found for paper '{paper}'")]
    NotFound {
        /// Identifier that was looked up
        paper: String,
    },
}

impl ApiError {
    /// Create a not found error for a paper lookup.
    #[must_use]
    pub fn not_found(paper: impl Into<String>) -> Self {
        Self::NotFound { paper: paper.into() }
    }

    /// HTTP status reported to the caller.
    ///
    /// Only an abstract lookup with no entry gets its own code; every
    /// collaborator failure, upstream 404s included, is a plain server error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request failed");
        }

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for handler operations.
pub type ApiResult<T> = Result<T, ApiError>;

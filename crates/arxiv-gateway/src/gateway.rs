//! Endpoint logic, independent of HTTP.
//!
//! The gateway depends on two collaborators behind traits so tests can
//! swap in fakes:
//! 1. [`PaperIndex`] answers Atom queries (search and id lookup)
//! 2. [`FullTextSource`] returns the per-page text of a paper's PDF

use std::sync::Arc;

use crate::config::api;
use crate::error::{ApiError, ApiResult, ClientResult};
use crate::models::{AbstractResult, FullTextResult, PaperRecord, SearchResult};
use crate::pdf;

/// Bibliographic search backend.
#[async_trait::async_trait]
pub trait PaperIndex: Send + Sync {
    /// Free-text search over all fields, in the backend's relevance order.
    async fn search(&self, text: &str, start: u32, max_results: u32)
    -> ClientResult<Vec<PaperRecord>>;

    /// Look up papers by identifier list.
    async fn lookup(&self, id_list: &str) -> ClientResult<Vec<PaperRecord>>;
}

/// PDF fetch and extraction backend.
#[async_trait::async_trait]
pub trait FullTextSource: Send + Sync {
    /// Text of each page of the paper's PDF, in page order.
    async fn pages(&self, paper: &str) -> ClientResult<Vec<String>>;
}

/// Shared handler state.
#[derive(Clone)]
pub struct Gateway {
    /// Search and lookup backend.
    pub index: Arc<dyn PaperIndex>,

    /// Full-text backend.
    pub full_text: Arc<dyn FullTextSource>,
}

impl Gateway {
    /// Create a gateway over the given collaborators.
    #[must_use]
    pub fn new(index: Arc<dyn PaperIndex>, full_text: Arc<dyn FullTextSource>) -> Self {
        Self { index, full_text }
    }

    /// Create a gateway backed by one client implementing both traits.
    #[must_use]
    pub fn from_client<C>(client: C) -> Self
    where
        C: PaperIndex + FullTextSource + 'static,
    {
        let client = Arc::new(client);
        Self { index: client.clone(), full_text: client }
    }

    /// `/search`: first page of results for `text`.
    pub async fn search(&self, text: &str) -> ApiResult<Vec<SearchResult>> {
        let records = self.index.search(text, 0, api::SEARCH_PAGE_SIZE).await?;
        Ok(records.into_iter().map(SearchResult::from).collect())
    }

    /// `/abstract`: the first entry matching `paper`.
    pub async fn abstract_of(&self, paper: &str) -> ApiResult<AbstractResult> {
        let record = self
            .index
            .lookup(paper)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::not_found(paper))?;
        Ok(record.into())
    }

    /// `/full`: the paper's text, pages joined with newlines.
    pub async fn full_text(&self, paper: &str) -> ApiResult<FullTextResult> {
        let pages = self.full_text.pages(paper).await?;
        Ok(FullTextResult { paper_id: paper.to_string(), text: pdf::join_pages(&pages) })
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway").finish_non_exhaustive()
    }
}

//! Paper records and the per-endpoint response shapes.

use serde::{Deserialize, Serialize};

use crate::config::api;

/// One arXiv entry, flattened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Trailing segment of the entry's id URL (e.g. `1706.03762v7`).
    pub paper_id: String,

    /// Author names joined with `", "`.
    pub authors: String,

    /// Entry title, verbatim.
    pub title: String,

    /// Entry summary, verbatim.
    pub r#abstract: String,

    /// Public PDF link derived from `paper_id`.
    pub pdf_url: String,
}

impl PaperRecord {
    /// Build a record, deriving `pdf_url` from `paper_id`.
    #[must_use]
    pub fn new(paper_id: String, title: String, authors: String, r#abstract: String) -> Self {
        let pdf_url = pdf_url(&paper_id);
        Self { paper_id, authors, title, r#abstract, pdf_url }
    }
}

/// Public PDF link for an arXiv identifier.
#[must_use]
pub fn pdf_url(paper_id: &str) -> String {
    format!("{}/{}.pdf", api::PUBLIC_PDF_BASE_URL, paper_id)
}

/// Trailing `/`-separated segment of an entry id URL.
#[must_use]
pub fn paper_id_from_url(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

/// `/search` element: a record without abstract and PDF link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub paper_id: String,
    pub authors: String,
    pub title: String,
}

impl From<PaperRecord> for SearchResult {
    fn from(record: PaperRecord) -> Self {
        Self { paper_id: record.paper_id, authors: record.authors, title: record.title }
    }
}

/// `/abstract` response: a record without the PDF link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractResult {
    pub paper_id: String,
    pub authors: String,
    pub title: String,
    pub r#abstract: String,
}

impl From<PaperRecord> for AbstractResult {
    fn from(record: PaperRecord) -> Self {
        Self {
            paper_id: record.paper_id,
            authors: record.authors,
            title: record.title,
            r#abstract: record.r#abstract,
        }
    }
}

/// `/full` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTextResult {
    /// Identifier exactly as requested.
    pub paper_id: String,

    /// Page texts joined with `'\n'`, in page order.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PaperRecord {
        PaperRecord::new(
            "1706.03762v7".to_string(),
            "Attention Is All You Need".to_string(),
            "Ashish Vaswani, Noam Shazeer".to_string(),
            "The dominant sequence transduction models...".to_string(),
        )
    }

    #[test]
    fn test_pdf_url_is_derived_from_id() {
        assert_eq!(record().pdf_url, "https://arxiv.org/pdf/1706.03762v7.pdf");
        assert_eq!(pdf_url(""), "https://arxiv.org/pdf/.pdf");
    }

    #[test]
    fn test_paper_id_from_url() {
        assert_eq!(paper_id_from_url("http://arxiv.org/abs/1706.03762v7"), "1706.03762v7");
        assert_eq!(paper_id_from_url("http://arxiv.org/abs/hep-th/9901001v1"), "9901001v1");
        assert_eq!(paper_id_from_url("no-slashes"), "no-slashes");
        assert_eq!(paper_id_from_url("trailing/"), "");
    }

    #[test]
    fn test_search_result_keys() {
        let value = serde_json::to_value(SearchResult::from(record())).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["authors", "paper_id", "title"]);
    }

    #[test]
    fn test_abstract_result_keys() {
        let value = serde_json::to_value(AbstractResult::from(record())).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["abstract", "authors", "paper_id", "title"]);
        assert_eq!(value["abstract"], "The dominant sequence transduction models...");
    }
}

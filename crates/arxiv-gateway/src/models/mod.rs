//! Data models for arXiv entries and gateway responses.
//!
//! Field names are serialized as-is (`snake_case`), matching the JSON the
//! endpoints return.

mod paper;

pub use paper::{
    AbstractResult, FullTextResult, PaperRecord, SearchResult, paper_id_from_url, pdf_url,
};

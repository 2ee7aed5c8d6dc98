//! arXiv Query Gateway
//!
//! A small HTTP service that turns simple queries into calls against the
//! arXiv export API and PDF host, and reshapes the answers into JSON.
//!
//! # Endpoints
//!
//! - **`/search?text=`**: first 10 matches as `{paper_id, authors, title}`
//! - **`/abstract?paper=`**: one paper as `{paper_id, authors, title, abstract}`
//! - **`/full?paper=`**: `{paper_id, text}` with the PDF's page text joined by newlines
//!
//! # Example
//!
//! ```no_run
//! use arxiv_gateway::{client::ArxivClient, config::Config, gateway::Gateway};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let gateway = Gateway::from_client(ArxivClient::new(config)?);
//!
//!     let hits = gateway.search("graph neural networks").await?;
//!     println!("{} results", hits.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod gateway;
pub mod models;
pub mod pdf;
pub mod server;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ApiError, ClientError, FeedError};
pub use gateway::{FullTextSource, Gateway, PaperIndex};

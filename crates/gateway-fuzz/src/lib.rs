//! Fuzzing library for arxiv-gateway.
//!
//! This crate provides fuzzing targets for the Atom feed and entry parsers.
//!
//! # Usage
//!
//! ```bash
//! cd crates/gateway-fuzz
//! cargo +nightly fuzz run fuzz_feed_parse -- -max_total_time=60
//! ```

pub use arxiv_gateway::feed;

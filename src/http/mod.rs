//! HTTP tracker endpoints.
//!
//! # Endpoints
//!
//! - `/{namespace}/announce` - Announce into a namespace
//! - `/{namespace}/scrape` - Scrape swarms of a namespace
//! - `/announce`, `/scrape` - Rejected with a missing-namespace failure
//!
//! Every other path answers 404. Responses are bencoded dictionaries with
//! `Content-Type: text/plain`; failures carry a `failure reason`.

/// Data structures shared by the HTTP handlers.
pub mod structs;

/// Server setup, routing and request handlers.
#[allow(clippy::module_inception)]
pub mod http;

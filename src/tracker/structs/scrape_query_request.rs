//! Scrape request query parameters.

use crate::tracker::structs::info_hash::InfoHash;

/// Parsed scrape request parameters.
///
/// Scrape requests let clients query swarm statistics without announcing.
/// Every hash is looked up inside the request's namespace.
///
/// # Example Request
///
/// ```text
/// GET /{namespace}/scrape?info_hash=%xx...&info_hash=%yy...
/// ```
#[derive(Clone, Debug)]
pub struct ScrapeQueryRequest {
    pub namespace: String,
    /// Requested hashes, in request order; duplicates are allowed.
    pub info_hash: Vec<InfoHash>,
}

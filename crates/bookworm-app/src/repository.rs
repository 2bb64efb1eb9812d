//! Book-search repository
//!
//! Wraps the one REST call the app makes: a GET against the book-search
//! endpoint, decoded as a JSON array of sections and mapped to display-ready
//! summaries. No retries, no caching, no query sanitization beyond what the
//! transport's parameter encoding guarantees.

use bookworm_core::prelude::*;
use bookworm_core::{ResultSummary, SearchSection};
use url::Url;

const SEARCH_PATH: &str = "/app/public/booksearch.json";
const SEARCH_PARAM: &str = "search";

/// Backend capable of resolving a query to result summaries
#[trait_variant::make(SearchBackend: Send)]
pub trait LocalSearchBackend {
    /// Resolve `query` to an ordered list of summaries.
    ///
    /// Fails with a request-failure [`Error`] (network, non-2xx status, or
    /// malformed payload).
    async fn search(&self, query: &str) -> Result<Vec<ResultSummary>>;
}

/// Repository issuing the remote book-search call
#[derive(Debug)]
pub struct SearchRepository {
    client: reqwest::Client,
    endpoint: Url,
}

impl SearchRepository {
    /// Create a repository against `base_url` using a pre-configured client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `base_url` is not a valid URL.
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(SEARCH_PATH))
            .map_err(|e| Error::config(format!("invalid base URL {base_url:?}: {e}")))?;

        Ok(Self { client, endpoint })
    }
}

impl SearchBackend for SearchRepository {
    async fn search(&self, query: &str) -> Result<Vec<ResultSummary>> {
        debug!(query, "issuing book search");

        let sections: Vec<SearchSection> = self
            .client
            .get(self.endpoint.clone())
            .query(&[(SEARCH_PARAM, query)])
            .send()
            .await
            .map_err(classify)?
            .error_for_status()
            .map_err(classify)?
            .json()
            .await
            .map_err(classify)?;

        debug!(sections = sections.len(), "book search resolved");

        Ok(sections.into_iter().map(ResultSummary::from).collect())
    }
}

/// Map a transport error onto the request-failure taxonomy.
fn classify(err: reqwest::Error) -> Error {
    if let Some(status) = err.status() {
        Error::status(status.as_u16())
    } else if err.is_decode() {
        Error::decode(err.to_string())
    } else {
        Error::transport(err.to_string())
    }
}

//! Search orchestration.
//!
//! [`SearchService`] is the entry point: it composes the wire path for a
//! collection, hands request construction and execution to the injected
//! [`Transport`], and returns the decoded response together with the
//! transport's metadata. It holds no state between calls and is safe to
//! share across concurrent callers.

use reqwest::Method;
use tracing::debug;

use crate::error::Error;
use crate::models::{Resource, SearchRequest, SearchResponse};
use crate::transport::{Transport, TransportMetadata};

/// Prefix of every search endpoint path.
const SEARCH_PATH_PREFIX: &str = "search";

/// Stateless search invoker over an injected transport.
pub struct SearchService<T> {
    transport: T,
}

impl<T: Transport> SearchService<T> {
    /// Wrap `transport` in a search service.
    pub fn new(transport: T) -> Self {
        SearchService { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one search against `resource`.
    ///
    /// The collection name is passed through opaquely; an unknown name is
    /// rejected by the server and comes back as a transport error, never as
    /// local validation.
    ///
    /// # Errors
    ///
    /// - [`Error::RequestConstruction`] when the transport cannot build the
    ///   request; nothing was sent.
    /// - [`Error::TransportExecution`] on network failure or a non-success
    ///   status; carries the status code when one exists.
    /// - [`Error::Decode`] when a success body does not match the response
    ///   schema; carries the status of the exchange.
    pub async fn search(
        &self,
        request: SearchRequest,
        resource: &Resource,
    ) -> Result<(SearchResponse, TransportMetadata), Error> {
        let path = format!("{}/{}", SEARCH_PATH_PREFIX, resource);
        debug!(resource = %resource, q = %request.q, "searching");

        let outbound = self
            .transport
            .build_request(&path, Method::POST, &request)?;

        let mut response = SearchResponse::default();
        let metadata = self.transport.execute(outbound, &mut response).await?;

        Ok((response, metadata))
    }
}

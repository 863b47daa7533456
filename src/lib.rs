//! # Ledger Search
//!
//! A typed async client for a ledger platform's document search API.
//!
//! The service exposes one search endpoint per resource collection
//! (`search/transactions`, `search/ledgers`, `search/balances`, ...). This
//! crate issues those queries and normalizes the loosely-typed JSON
//! responses into a strongly shaped model: timestamps arrive as epoch
//! numbers, epoch strings, or RFC3339 and decode uniformly through
//! [`timestamp::FlexibleTimestamp`]; flat and grouped hit lists share one
//! envelope; the `meta_data` payload keeps whatever shape the server sent.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐   ┌─────────────┐   ┌────────────┐
//! │ SearchRequest │──▶│SearchService │──▶│ Transport   │──▶ HTTP
//! │ (caller)      │   │ search/{res} │   │ build + exec│
//! └───────────────┘   └──────┬──────┘   └────────────┘
//!                            ▼
//!                    SearchResponse + status code
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ledger_search::config::ClientConfig;
//! use ledger_search::models::{Resource, SearchRequest};
//! use ledger_search::search::SearchService;
//! use ledger_search::transport::HttpTransport;
//!
//! # async fn run() -> Result<(), ledger_search::error::Error> {
//! let transport = HttpTransport::new(&ClientConfig::new("http://localhost:5001/"))?;
//! let service = SearchService::new(transport);
//!
//! let request = SearchRequest {
//!     q: "*".to_string(),
//!     query_by: "transaction_id,reference,description".to_string(),
//!     filter_by: Some("status:APPLIED".to_string()),
//!     sort_by: Some("created_at:desc".to_string()),
//!     page: 1,
//!     per_page: 10,
//!     ..Default::default()
//! };
//!
//! let (response, meta) = service.search(request, &Resource::Transactions).await?;
//! println!("{} hits ({})", response.found, meta.status_code);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Client configuration for the default transport |
//! | [`error`] | Typed error surface |
//! | [`timestamp`] | Multi-format timestamp decoding |
//! | [`models`] | Request/response/document wire types |
//! | [`transport`] | Transport trait and `reqwest` implementation |
//! | [`search`] | `SearchService` orchestration |

pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod timestamp;
pub mod transport;

pub use config::ClientConfig;
pub use error::Error;
pub use models::{
    GroupedHit, MetaData, Resource, SearchDocument, SearchHit, SearchRequest, SearchResponse,
};
pub use search::SearchService;
pub use timestamp::FlexibleTimestamp;
pub use transport::{HttpTransport, Transport, TransportMetadata};

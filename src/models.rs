//! Wire types for the search API.
//!
//! These types model the request body sent to `search/{resource}` and the
//! response envelope the server returns. The server stores one heterogeneous
//! document shape per collection, so [`SearchDocument`] is a single superset
//! struct covering transaction, ledger, and balance fields as optionals —
//! which collection a document came from is known from the query, not from
//! the document itself.
//!
//! Two decode rules run through everything here:
//!
//! - A *missing* optional field is never an error; it decodes to its unset
//!   state. Only present-but-malformed values fail.
//! - [`SearchResponse::hits`] and [`SearchResponse::grouped_hits`] are
//!   always-present vectors, never `Option`. The server populates at most one
//!   of them (grouped when the request carried `group_by`, flat otherwise),
//!   and callers can inspect both lengths without a null check.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::timestamp::FlexibleTimestamp;

/// A named searchable collection on the remote service.
///
/// The client never validates the name locally; an unknown collection is
/// rejected by the server and surfaces as a transport error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    Transactions,
    Ledgers,
    Balances,
    /// Any other server-recognized collection name.
    Custom(String),
}

impl Resource {
    /// The collection name as it appears in the wire path.
    pub fn as_str(&self) -> &str {
        match self {
            Resource::Transactions => "transactions",
            Resource::Ledgers => "ledgers",
            Resource::Balances => "balances",
            Resource::Custom(name) => name,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Resource {
    fn from(name: &str) -> Self {
        match name {
            "transactions" => Resource::Transactions,
            "ledgers" => Resource::Ledgers,
            "balances" => Resource::Balances,
            other => Resource::Custom(other.to_string()),
        }
    }
}

/// Search request body.
///
/// Constructed by the caller and passed through to the server uninterpreted.
/// `q` and `query_by` are conventionally required by the server; the client
/// does not enforce that. The same type comes back in
/// [`SearchResponse::request_params`] as an echo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Query text (`"*"` matches everything).
    pub q: String,
    /// Comma-separated document fields to match against.
    pub query_by: String,
    /// Filter expression, e.g. `"status:APPLIED"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_by: Option<String>,
    /// Sort specifier, e.g. `"created_at:desc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Field to cluster hits by; switches the response to grouped shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    /// Maximum hits per group when grouping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_limit: Option<u32>,
}

/// The `meta_data` payload attached to a document.
///
/// The server does not constrain its shape — objects, strings, and arrays
/// have all been observed. The shape that arrives is preserved verbatim;
/// this layer never interprets or coerces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaData {
    /// Key-value mapping.
    Map(serde_json::Map<String, serde_json::Value>),
    /// Sequence of arbitrary values.
    List(Vec<serde_json::Value>),
    /// Bare string.
    Text(String),
}

/// One document as returned by the search API.
///
/// A superset of the transaction, ledger, and balance shapes; every field
/// except `id` is optional and left unset when the wire omits it. Temporal
/// fields reject an explicit `null` (a malformed value) while tolerating
/// absence — that asymmetry matches observed server behavior and is kept
/// deliberately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDocument {
    /// Resource-specific primary key.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// String-formatted duplicate of `amount`; preserved, not reconciled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precise_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub destinations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_transaction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdraft_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_overdraft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atomic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_queue: Option<bool>,
    #[serde(
        deserialize_with = "timestamp_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<FlexibleTimestamp>,
    #[serde(
        deserialize_with = "timestamp_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_date: Option<FlexibleTimestamp>,
    #[serde(
        deserialize_with = "timestamp_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_for: Option<FlexibleTimestamp>,
    #[serde(
        deserialize_with = "timestamp_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub inflight_expiry_date: Option<FlexibleTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_balance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit_balance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

/// A present timestamp field must be a valid wire value; `null` is malformed.
/// Absence never reaches this function — the struct default leaves `None`.
fn timestamp_field<'de, D>(deserializer: D) -> Result<Option<FlexibleTimestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    FlexibleTimestamp::deserialize(deserializer).map(Some)
}

/// One flat search hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHit {
    pub document: SearchDocument,
}

/// One group of hits when the request carried `group_by`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedHit {
    /// Value tuple of the group-by field for this cluster.
    pub group_key: Vec<String>,
    /// Hits in this group, capped at the request's `group_limit`.
    pub hits: Vec<SearchHit>,
}

/// Search response envelope.
///
/// Every field defaults, so an empty body object decodes to the all-zero
/// response with both hit vectors empty rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// Total number of matching documents.
    pub found: u64,
    /// Size of the corpus searched.
    pub out_of: u64,
    /// Page this envelope covers.
    pub page: u32,
    /// Server-side search time in milliseconds.
    pub search_time_ms: u64,
    /// Echo of the request, for caller convenience.
    pub request_params: SearchRequest,
    /// Flat hits; empty when the response is grouped or has no matches.
    pub hits: Vec<SearchHit>,
    /// Grouped hits; empty unless the request carried `group_by`.
    pub grouped_hits: Vec<GroupedHit>,
}

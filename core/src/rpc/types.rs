//! Sui JSON-RPC wire types.
//!
//! Shapes follow the full node's JSON encoding (camelCase keys, u64 values
//! as strings).

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{RpcError, RpcResult};

// =============================================================================
// JSON-RPC envelope
// =============================================================================

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    pub params: Value,
}

impl RpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// Error object inside a JSON-RPC response.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl RpcResponse {
    /// Unwrap the envelope: the error object wins, a missing result is a decode error.
    pub fn into_result(self) -> RpcResult<Value> {
        if let Some(err) = self.error {
            return Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        self.result
            .ok_or_else(|| RpcError::Decode("response has neither result nor error".to_string()))
    }
}

// =============================================================================
// Events
// =============================================================================

/// Unique event id: transaction digest plus sequence within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventId {
    pub tx_digest: String,
    pub event_seq: String,
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.tx_digest, self.event_seq)
    }
}

/// An event as returned by `suix_queryEvents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiEvent {
    pub id: EventId,
    #[serde(default)]
    pub package_id: String,
    #[serde(default)]
    pub transaction_module: String,
    #[serde(default)]
    pub sender: String,
    #[serde(rename = "type")]
    pub event_type: String,
    /// Move struct fields decoded to JSON.
    #[serde(default)]
    pub parsed_json: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<String>,
}

/// One page of events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    pub data: Vec<SuiEvent>,
    #[serde(default)]
    pub next_cursor: Option<EventId>,
    #[serde(default)]
    pub has_next_page: bool,
}

/// Event filter, serialized in the node's externally-tagged form
/// (`{"MoveEventType": "0x..::manage::ProfileCreated"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventFilter {
    MoveEventType(String),
    MoveModule { package: String, module: String },
    Sender(String),
    Transaction(String),
}

/// Parameters of a `suix_queryEvents` call.
#[derive(Debug, Clone, PartialEq)]
pub struct EventQuery {
    pub filter: EventFilter,
    pub cursor: Option<EventId>,
    pub limit: Option<u32>,
    pub descending: bool,
}

impl EventQuery {
    /// First page, node default limit, ascending.
    pub fn new(filter: EventFilter) -> Self {
        Self {
            filter,
            cursor: None,
            limit: None,
            descending: false,
        }
    }

    pub fn with_cursor(mut self, cursor: EventId) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }

    /// Positional params: `[filter, cursor, limit, descending]`.
    pub fn to_params(&self) -> Value {
        json!([self.filter, self.cursor, self.limit, self.descending])
    }
}

//! Sui full node JSON-RPC client.
//!
//! [`SuiClient`] speaks the two methods this application needs
//! (`suix_queryEvents`, `sui_getTransactionBlock`) over any
//! [`RpcTransport`]: reqwest natively ([`HttpTransport`]), gloo-net in the
//! browser (see the frontend's `services::sui`).

pub mod types;

#[cfg(feature = "native")]
pub mod http;

use async_trait::async_trait;
use serde_json::{json, Value};
use std::cell::Cell;

use crate::error::{ExecutionResult, RpcError, RpcResult};
use crate::execution::ConfirmTransaction;
use crate::query::EventIndex;

pub use types::{EventFilter, EventId, EventPage, EventQuery, RpcRequest, RpcResponse, SuiEvent};

#[cfg(feature = "native")]
pub use http::HttpTransport;

/// Default delay between confirmation polls, as in the Sui TypeScript SDK.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 2_000;

/// Default confirmation budget.
pub const DEFAULT_TIMEOUT_MS: u32 = 60_000;

/// Moves JSON-RPC envelopes to a node.
#[async_trait(?Send)]
pub trait RpcTransport {
    /// Send one request and decode the response envelope.
    async fn send(&self, request: &RpcRequest) -> RpcResult<RpcResponse>;

    /// Sleep between polls, using whatever timer the runtime offers.
    async fn pause(&self, millis: u32);
}

/// Typed client over a transport.
pub struct SuiClient<T> {
    transport: T,
    next_id: Cell<u64>,
    poll_interval_ms: u32,
    timeout_ms: u32,
}

impl<T: RpcTransport> SuiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            next_id: Cell::new(1),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_poll_interval(mut self, millis: u32) -> Self {
        self.poll_interval_ms = millis.max(1);
        self
    }

    pub fn with_timeout(mut self, millis: u32) -> Self {
        self.timeout_ms = millis;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Raw call: build the envelope, send, unwrap.
    pub async fn call(&self, method: &str, params: Value) -> RpcResult<Value> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let request = RpcRequest::new(id, method, params);
        log::debug!("RPC #{} {}", id, method);
        self.transport.send(&request).await?.into_result()
    }

    /// `suix_queryEvents`.
    pub async fn query_events(&self, query: &EventQuery) -> RpcResult<EventPage> {
        let result = self.call("suix_queryEvents", query.to_params()).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// `sui_getTransactionBlock` with effects.
    pub async fn get_transaction_block(&self, digest: &str) -> RpcResult<Value> {
        self.call(
            "sui_getTransactionBlock",
            json!([digest, {"showEffects": true}]),
        )
        .await
    }

    /// Poll until the node knows `digest`, then check its effects status.
    ///
    /// Gives up after `timeout / poll_interval` attempts. Counting attempts
    /// instead of reading a clock keeps this usable on WASM.
    pub async fn wait_for_transaction_block(&self, digest: &str) -> RpcResult<Value> {
        let attempts = (self.timeout_ms / self.poll_interval_ms).max(1);

        for attempt in 1..=attempts {
            match self.get_transaction_block(digest).await {
                Ok(block) => {
                    check_effects(digest, &block)?;
                    log::info!("Transaction {} finalized after {} attempt(s)", digest, attempt);
                    return Ok(block);
                }
                Err(err) if err.is_not_found() => {
                    if attempt < attempts {
                        self.transport.pause(self.poll_interval_ms).await;
                    }
                }
                Err(err) => return Err(err),
            }
        }

        Err(RpcError::Timeout {
            digest: digest.to_string(),
            attempts,
        })
    }
}

/// Fail when the effects carry `status.status == "failure"`.
fn check_effects(digest: &str, block: &Value) -> RpcResult<()> {
    let status = &block["effects"]["status"];
    if status["status"].as_str() == Some("failure") {
        let reason = status["error"].as_str().unwrap_or("unknown error").to_string();
        return Err(RpcError::TransactionFailed {
            digest: digest.to_string(),
            reason,
        });
    }
    Ok(())
}

#[async_trait(?Send)]
impl<T: RpcTransport> EventIndex for SuiClient<T> {
    async fn query_events(&self, query: &EventQuery) -> RpcResult<EventPage> {
        SuiClient::query_events(self, query).await
    }
}

#[async_trait(?Send)]
impl<T: RpcTransport> ConfirmTransaction for SuiClient<T> {
    async fn wait_for_transaction(&self, digest: &str) -> ExecutionResult<()> {
        self.wait_for_transaction_block(digest).await?;
        Ok(())
    }
}

//! Sui full node access from the browser.
//!
//! Plugs gloo-net into the shared [`SuiClient`] so the state reader and the
//! confirmation wait run unchanged in WASM.

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use profiles::error::{RpcError, RpcResult};
use profiles::rpc::{RpcRequest, RpcResponse};
use profiles::{query_state, ApplicationState, NetworkConfig, RpcTransport, SuiClient};

use crate::config::network_config;
use crate::types::AppResult;

/// JSON-RPC over `fetch`.
pub struct GlooTransport {
    url: String,
}

impl GlooTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl RpcTransport for GlooTransport {
    async fn send(&self, request: &RpcRequest) -> RpcResult<RpcResponse> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| RpcError::Http(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| RpcError::Http(e.to_string()))?;

        if !response.ok() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RpcError::Status {
                code: response.status(),
                body,
            });
        }

        response
            .json::<RpcResponse>()
            .await
            .map_err(|e| RpcError::Decode(e.to_string()))
    }

    async fn pause(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

/// Client for the configured full node.
pub fn fullnode_client(config: &NetworkConfig) -> SuiClient<GlooTransport> {
    SuiClient::new(GlooTransport::new(config.rpc_url.clone()))
}

/// Rebuild the profile list from chain events.
pub async fn load_profiles() -> AppResult<ApplicationState> {
    let config = network_config()?;
    let client = fullnode_client(&config);

    log::info!("🔎 Loading profiles from {}", config.rpc_url);
    let state = query_state(&client, &config).await?;
    Ok(state)
}

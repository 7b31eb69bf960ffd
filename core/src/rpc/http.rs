//! reqwest transport for native builds.

use async_trait::async_trait;
use std::time::Duration;

use super::{RpcRequest, RpcResponse, RpcTransport};
use crate::error::{RpcError, RpcResult};

/// Default per-request timeout.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// JSON-RPC over HTTP POST.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> RpcResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| RpcError::Http(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl RpcTransport for HttpTransport {
    async fn send(&self, request: &RpcRequest) -> RpcResult<RpcResponse> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| RpcError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RpcError::Status {
                code: status.as_u16(),
                body,
            });
        }

        response
            .json::<RpcResponse>()
            .await
            .map_err(|e| RpcError::Decode(e.to_string()))
    }

    async fn pause(&self, millis: u32) {
        tokio::time::sleep(Duration::from_millis(u64::from(millis))).await;
    }
}

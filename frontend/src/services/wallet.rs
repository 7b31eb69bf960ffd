//! Sui wallet access through the Wallet Standard.
//!
//! The wallet itself lives in a browser extension; `src/js/wallet.js` finds
//! it, rebuilds a `Transaction` from our JSON request, and forwards the
//! sign-and-execute call.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use profiles::error::{ExecutionError, ExecutionResult};
use profiles::{ExecutionOutput, SignAndExecute, TransactionRequest};

use crate::config::APP_NAME;
use crate::types::{AppError, AppResult, WalletInfo};

/// Signer backed by the connected extension wallet.
pub struct WalletSigner {
    network: String,
}

impl WalletSigner {
    /// `network` selects the `sui:<network>` chain the wallet signs for.
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
        }
    }
}

#[async_trait(?Send)]
impl SignAndExecute for WalletSigner {
    async fn sign_and_execute(&self, request: &TransactionRequest) -> ExecutionResult<ExecutionOutput> {
        let tx_json = request
            .to_json()
            .map_err(|e| ExecutionError::Wallet(format!("Failed to serialize transaction: {}", e)))?;

        log::info!("✍️ Requesting wallet signature on {}", self.network);

        let result = JsFuture::from(sign_and_execute_js(&self.network, &tx_json))
            .await
            .map_err(|e| classify_wallet_error(&js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(result)
            .map_err(|e| ExecutionError::Wallet(format!("Failed to parse wallet result: {}", e)))
    }
}

/// Connect the first Sui-capable wallet and return its first account.
pub async fn connect_wallet() -> AppResult<WalletInfo> {
    log::info!("🔌 Connecting to wallet...");

    let result = JsFuture::from(connect_wallet_js(APP_NAME))
        .await
        .map_err(|e| AppError::Wallet(js_error_message(&e)))?;

    let wallet: WalletInfo = serde_wasm_bindgen::from_value(result)
        .map_err(|e| AppError::Wallet(format!("Failed to parse wallet account: {}", e)))?;

    log::info!("✅ Connected to {}: {}", wallet.source, wallet.address);
    Ok(wallet)
}

/// Wallets report user rejection only through the message text.
pub fn classify_wallet_error(message: &str) -> ExecutionError {
    let lower = message.to_ascii_lowercase();
    if lower.contains("reject") || lower.contains("denied") || lower.contains("cancel") {
        ExecutionError::Rejected(message.to_string())
    } else {
        ExecutionError::Wallet(message.to_string())
    }
}

fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}

/// JavaScript functions from wallet.js
#[wasm_bindgen(module = "/src/js/wallet.js")]
extern "C" {
    #[wasm_bindgen(js_name = "connectWallet")]
    fn connect_wallet_js(app_name: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "signAndExecuteTransaction")]
    fn sign_and_execute_js(network: &str, tx_json: &str) -> js_sys::Promise;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_wallet_error() {
        assert!(matches!(
            classify_wallet_error("User rejected the request"),
            ExecutionError::Rejected(_)
        ));
        assert!(matches!(
            classify_wallet_error("Insufficient gas"),
            ExecutionError::Wallet(_)
        ));
    }
}

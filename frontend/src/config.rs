//! Application configuration.
//!
//! Compile-time constants. Deployment values can be injected at build time,
//! e.g. `PROFILES_PACKAGE_ID=0x… trunk build`.

use profiles::NetworkConfig;

use crate::types::AppResult;

/// Sui network name (`mainnet`, `testnet`, `devnet`, `localnet`).
pub const NETWORK: &str = match option_env!("SUI_NETWORK") {
    Some(network) => network,
    None => "testnet",
};

/// Full node JSON-RPC endpoint.
pub const RPC_URL: &str = match option_env!("SUI_RPC_URL") {
    Some(url) => url,
    None => "https://fullnode.testnet.sui.io:443",
};

/// Published `manage` package.
pub const PACKAGE_ID: &str = match option_env!("PROFILES_PACKAGE_ID") {
    Some(id) => id,
    None => "0x0",
};

/// Shared `State` object of the package.
pub const STATE_OBJECT_ID: &str = match option_env!("PROFILES_STATE_ID") {
    Some(id) => id,
    None => "0x0",
};

/// Application name for wallet connection.
///
/// Displayed in wallet extension popups.
pub const APP_NAME: &str = "Sui Profiles";

/// Wait for finality before reporting success (and refreshing the list).
pub const WAIT_FOR_TX: bool = true;

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Validated network configuration built from the constants above.
pub fn network_config() -> AppResult<NetworkConfig> {
    let config = NetworkConfig::new(NETWORK.parse()?, PACKAGE_ID, STATE_OBJECT_ID)?;
    Ok(config.with_rpc_url(RPC_URL))
}

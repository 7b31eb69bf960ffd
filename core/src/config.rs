//! Network configuration.
//!
//! The package id and shared `State` object id are deployment facts, so they
//! are never hardcoded here. Natively they come from the environment (or a
//! `.env` file); the frontend passes build-time constants to
//! [`NetworkConfig::new`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

/// Move module holding the profile entry points.
pub const PROFILE_MODULE: &str = "manage";

/// Entry function creating a profile (name as deployed on chain).
pub const CREATE_PROFILE_FUNCTION: &str = "creat_profile";

/// Event struct emitted by `creat_profile`.
pub const PROFILE_CREATED_EVENT: &str = "ProfileCreated";

/// Environment variable names read by [`NetworkConfig::from_env`].
pub const ENV_NETWORK: &str = "SUI_NETWORK";
pub const ENV_RPC_URL: &str = "SUI_RPC_URL";
pub const ENV_PACKAGE_ID: &str = "PROFILES_PACKAGE_ID";
pub const ENV_STATE_ID: &str = "PROFILES_STATE_ID";

// =============================================================================
// Object ids
// =============================================================================

/// A Sui object id or address, normalized to `0x` + 64 lowercase hex digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    /// Hex digits in a full-length id.
    pub const HEX_LEN: usize = 64;

    /// Parse and normalize. Short forms such as `0x6` are zero-padded.
    pub fn parse(value: &str) -> ConfigResult<Self> {
        let invalid = |reason: &str| ConfigError::InvalidObjectId {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(invalid("empty"));
        }
        if digits.len() > Self::HEX_LEN {
            return Err(invalid("longer than 32 bytes"));
        }

        let padded = format!("{:0>width$}", digits.to_ascii_lowercase(), width = Self::HEX_LEN);
        hex::decode(&padded).map_err(|e| invalid(&e.to_string()))?;

        Ok(Self(format!("0x{}", padded)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ObjectId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

// =============================================================================
// Networks
// =============================================================================

/// Sui network selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
    Localnet,
}

impl Network {
    /// Public full node URL for this network.
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
            Network::Localnet => "http://127.0.0.1:9000",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Localnet => "localnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            "localnet" | "local" => Ok(Network::Localnet),
            other => Err(ConfigError::UnknownNetwork(other.to_string())),
        }
    }
}

// =============================================================================
// NetworkConfig
// =============================================================================

/// Everything the reader and builder need to address the deployed package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub network: Network,
    pub rpc_url: String,
    pub package_id: ObjectId,
    /// Shared `State` object passed to `creat_profile`.
    pub state_object_id: ObjectId,
}

impl NetworkConfig {
    /// Build a config using the network's default RPC URL.
    pub fn new(network: Network, package_id: &str, state_object_id: &str) -> ConfigResult<Self> {
        Ok(Self {
            network,
            rpc_url: network.default_rpc_url().to_string(),
            package_id: ObjectId::parse(package_id)?,
            state_object_id: ObjectId::parse(state_object_id)?,
        })
    }

    /// Override the RPC endpoint.
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Fully-qualified `ProfileCreated` event type.
    pub fn profile_event_type(&self) -> String {
        format!("{}::{}::{}", self.package_id, PROFILE_MODULE, PROFILE_CREATED_EVENT)
    }

    /// Load from the process environment, reading `.env` first if present.
    #[cfg(feature = "native")]
    pub fn from_env() -> ConfigResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Shared loader over any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let network = match lookup(ENV_NETWORK) {
            Some(name) => name.parse()?,
            None => Network::default(),
        };

        let package_id = lookup(ENV_PACKAGE_ID)
            .ok_or_else(|| ConfigError::Missing(ENV_PACKAGE_ID.to_string()))?;
        let state_id = lookup(ENV_STATE_ID)
            .ok_or_else(|| ConfigError::Missing(ENV_STATE_ID.to_string()))?;

        let mut config = Self::new(network, &package_id, &state_id)?;
        if let Some(url) = lookup(ENV_RPC_URL) {
            config = config.with_rpc_url(url);
        }

        log::debug!("Loaded {} config, RPC {}", config.network, config.rpc_url);
        Ok(config)
    }
}

/// Layered key lookup: command-line flags, then the environment, then an
/// env file.
pub fn layered_lookup<'a>(
    flags: &'a HashMap<String, String>,
    env: impl Fn(&str) -> Option<String> + 'a,
    file: &'a HashMap<String, String>,
) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        flags
            .get(key)
            .cloned()
            .or_else(|| env(key))
            .or_else(|| file.get(key).cloned())
    }
}

/// Read a `.env` file into a map without touching the process environment.
#[cfg(feature = "native")]
pub fn read_env_file(path: &std::path::Path) -> ConfigResult<HashMap<String, String>> {
    dotenvy::from_path_iter(path)
        .map_err(|e| ConfigError::EnvFile(format!("{}: {}", path.display(), e)))?
        .map(|item| item.map_err(|e| ConfigError::EnvFile(format!("{}: {}", path.display(), e))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKAGE: &str = "0x5c0a41b6e9b0b7e6c1d2f7a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7";

    #[test]
    fn test_object_id_normalization() {
        let id = ObjectId::parse("0x6").unwrap();
        assert_eq!(id.as_str().len(), 66);
        assert!(id.as_str().ends_with("0006"));

        let upper = ObjectId::parse(&PACKAGE.to_uppercase().replacen("0X", "0x", 1)).unwrap();
        assert_eq!(upper.as_str(), PACKAGE);
    }

    #[test]
    fn test_object_id_rejects_garbage() {
        assert!(ObjectId::parse("").is_err());
        assert!(ObjectId::parse("0x").is_err());
        assert!(ObjectId::parse("0xnothex").is_err());
        assert!(ObjectId::parse(&format!("{}00", PACKAGE)).is_err());
    }

    #[test]
    fn test_object_id_serde() {
        let id: ObjectId = serde_json::from_str("\"0x2\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{}\"", id));
        assert!(serde_json::from_str::<ObjectId>("\"0xqq\"").is_err());
    }

    #[test]
    fn test_profile_event_type() {
        let config = NetworkConfig::new(Network::Testnet, PACKAGE, "0x1234").unwrap();
        assert_eq!(
            config.profile_event_type(),
            format!("{}::manage::ProfileCreated", PACKAGE)
        );
        assert_eq!(config.rpc_url, "https://fullnode.testnet.sui.io:443");
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_NETWORK, "devnet"),
            (ENV_PACKAGE_ID, PACKAGE),
            (ENV_STATE_ID, "0xabc"),
            (ENV_RPC_URL, "http://localhost:9000"),
        ]
        .into_iter()
        .collect();

        let config = NetworkConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.network, Network::Devnet);
        assert_eq!(config.rpc_url, "http://localhost:9000");
        assert!(config.state_object_id.as_str().ends_with("abc"));
    }

    #[test]
    fn test_from_lookup_missing_package() {
        let err = NetworkConfig::from_lookup(|_| None).unwrap_err();
        assert_eq!(err, ConfigError::Missing(ENV_PACKAGE_ID.to_string()));
    }

    #[test]
    fn test_unknown_network() {
        assert!(matches!(
            "moonnet".parse::<Network>(),
            Err(ConfigError::UnknownNetwork(_))
        ));
        assert_eq!("Local".parse::<Network>().unwrap(), Network::Localnet);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_read_env_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# deployment").unwrap();
        writeln!(file, "{}={}", ENV_PACKAGE_ID, PACKAGE).unwrap();
        writeln!(file, "{}=0x99", ENV_STATE_ID).unwrap();
        drop(file);

        let vars = read_env_file(&path).unwrap();
        let config = NetworkConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.package_id.as_str(), PACKAGE);
        assert!(config.state_object_id.as_str().ends_with("99"));
        assert_eq!(config.network, Network::Testnet);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_read_env_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_env_file(&dir.path().join("absent.env")).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile(ref msg) if msg.contains("absent.env")));
    }

    #[test]
    fn test_layered_lookup_precedence() {
        let flags: HashMap<String, String> = [(ENV_NETWORK.to_string(), "devnet".to_string())]
            .into_iter()
            .collect();
        let file: HashMap<String, String> = [
            (ENV_NETWORK.to_string(), "mainnet".to_string()),
            (ENV_PACKAGE_ID.to_string(), "0x1".to_string()),
            (ENV_STATE_ID.to_string(), "0x2".to_string()),
        ]
        .into_iter()
        .collect();
        let env = |key: &str| match key {
            ENV_NETWORK => Some("localnet".to_string()),
            ENV_PACKAGE_ID => Some(PACKAGE.to_string()),
            _ => None,
        };

        let lookup = layered_lookup(&flags, env, &file);
        assert_eq!(lookup(ENV_NETWORK).as_deref(), Some("devnet"));
        assert_eq!(lookup(ENV_PACKAGE_ID).as_deref(), Some(PACKAGE));
        assert_eq!(lookup(ENV_STATE_ID).as_deref(), Some("0x2"));
        assert_eq!(lookup(ENV_RPC_URL), None);

        let config = NetworkConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.network, Network::Devnet);
        assert_eq!(config.package_id.as_str(), PACKAGE);
        assert!(config.state_object_id.as_str().ends_with("02"));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_layered_lookup_over_env_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deploy.env");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}=mainnet", ENV_NETWORK).unwrap();
        writeln!(file, "{}={}", ENV_PACKAGE_ID, PACKAGE).unwrap();
        writeln!(file, "{}=0x99", ENV_STATE_ID).unwrap();
        drop(file);

        let vars = read_env_file(&path).unwrap();
        let flags: HashMap<String, String> = [(ENV_STATE_ID.to_string(), "0x42".to_string())]
            .into_iter()
            .collect();
        let env = |key: &str| (key == ENV_NETWORK).then(|| "devnet".to_string());

        let config = NetworkConfig::from_lookup(layered_lookup(&flags, env, &vars)).unwrap();
        assert_eq!(config.network, Network::Devnet);
        assert_eq!(config.package_id.as_str(), PACKAGE);
        assert!(config.state_object_id.as_str().ends_with("42"));
    }
}

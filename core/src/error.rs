//! Error types for the profiles client.
//!
//! One enum per concern:
//!
//! - [`RpcError`] - JSON-RPC transport and protocol errors
//! - [`QueryError`] - State reconstruction errors
//! - [`ExecutionError`] - Signing, execution and confirmation errors
//! - [`ConfigError`] - Network configuration errors
//! - [`CliError`] - Top-level CLI errors (native only)
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// RPC Errors
// =============================================================================

/// Errors from the Sui JSON-RPC layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RpcError {
    /// Request could not be sent or the connection dropped.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Non-success HTTP status.
    #[error("Server error ({code}): {body}")]
    Status { code: u16, body: String },

    /// Response body was not the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// JSON-RPC error object returned by the node.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Confirmation polling gave up.
    #[error("Transaction {digest} not confirmed after {attempts} attempts")]
    Timeout { digest: String, attempts: u32 },

    /// Transaction was finalized with a failure status.
    #[error("Transaction {digest} failed: {reason}")]
    TransactionFailed { digest: String, reason: String },
}

impl RpcError {
    /// Whether the node reported that it does not know the transaction (yet).
    pub fn is_not_found(&self) -> bool {
        match self {
            RpcError::Rpc { message, .. } => {
                let message = message.to_ascii_lowercase();
                message.contains("could not find") || message.contains("not found")
            }
            _ => false,
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::Decode(err.to_string())
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors while rebuilding application state from events.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The event index call failed.
    #[error("Event query failed: {0}")]
    Index(#[from] RpcError),

    /// An event payload did not decode as a profile.
    #[error("Event #{index} ({event_id}) has an invalid profile payload: {source}")]
    Payload {
        index: usize,
        event_id: String,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Execution Errors
// =============================================================================

/// Errors surfaced to `on_error` during transaction execution.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExecutionError {
    /// Wallet failed to sign or submit.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// User rejected the signature request.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Confirmation wait failed.
    #[error("Confirmation failed: {0}")]
    Confirmation(#[from] RpcError),

    /// A user callback failed.
    #[error("Callback failed: {0}")]
    Callback(String),
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while building a [`crate::config::NetworkConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Required variable not set.
    #[error("Missing configuration value: {0}")]
    Missing(String),

    /// Malformed object id or address.
    #[error("Invalid object id '{value}': {reason}")]
    InvalidObjectId { value: String, reason: String },

    /// `.env` file could not be read or parsed.
    #[error("Failed to read env file: {0}")]
    EnvFile(String),

    /// Network name not recognized.
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
}

// =============================================================================
// CLI Errors (top-level)
// =============================================================================

/// Top-level CLI errors.
#[cfg(feature = "native")]
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// Result type for state queries.
pub type QueryResult<T> = Result<T, QueryError>;

/// Result type for execution steps.
pub type ExecutionResult<T> = Result<T, ExecutionError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for the CLI.
#[cfg(feature = "native")]
pub type CliResult<T> = Result<T, CliError>;

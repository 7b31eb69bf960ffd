//! # Profiles - Sui profile registry client
//!
//! Client-side logic for the `manage` Move package: rebuilds the profile
//! list from `ProfileCreated` events, builds `creat_profile` calls, and
//! wraps a wallet in a callback chain with a single in-flight guard.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  suix_queryEvents   ┌─────────────┐     ┌──────────────────┐
//! │  Full node  │────────────────────▶│    query    │────▶│ ApplicationState │
//! └─────────────┘                     └─────────────┘     └──────────────────┘
//!        ▲
//!        │ sui_getTransactionBlock (wait)
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ transaction │────▶│  execution  │────▶│   Wallet    │
//! │  (builder)  │     │   (chain)   │     │ (external)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use profiles::{query_state, HttpTransport, NetworkConfig, SuiClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = NetworkConfig::from_env().unwrap();
//!     let client = SuiClient::new(HttpTransport::new(&config.rpc_url).unwrap());
//!     let state = query_state(&client, &config).await.unwrap();
//!     println!("{} profiles", state.users.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Network configuration and object ids
//! - [`models`] - Profile and application state
//! - [`query`] - State reader
//! - [`transaction`] - Transaction builder
//! - [`execution`] - Sign-and-execute callback chain
//! - [`rpc`] - JSON-RPC client and transports
//!
//! ## Features
//!
//! - `native` (default): reqwest transport, `.env` loading, CLI binary.
//!   Disable it for WASM builds.

// Core modules
pub mod error;
pub mod config;
pub mod models;

// Reading
pub mod rpc;
pub mod query;

// Writing
pub mod transaction;
pub mod execution;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{ConfigError, ExecutionError, QueryError, RpcError};

#[cfg(feature = "native")]
pub use error::CliError;

// =============================================================================
// Re-exports - Config & models
// =============================================================================

pub use config::{
    Network,
    NetworkConfig,
    ObjectId,
    CREATE_PROFILE_FUNCTION,
    PROFILE_CREATED_EVENT,
    PROFILE_MODULE,
};

pub use models::{ApplicationState, Profile};

// =============================================================================
// Re-exports - State reader
// =============================================================================

pub use query::{profile_events_query, query_state, EventIndex};

// =============================================================================
// Re-exports - Transactions
// =============================================================================

pub use transaction::{create_profile_tx, CallArg, Command, MoveCall, PureArg, TransactionRequest};

pub use execution::{
    ConfirmTransaction,
    ExecuteOutcome,
    ExecutionOutput,
    LoadingFlag,
    SignAndExecute,
    TransactionChain,
    TransactionExecutor,
};

// =============================================================================
// Re-exports - RPC
// =============================================================================

pub use rpc::{EventFilter, EventId, EventPage, EventQuery, RpcTransport, SuiClient, SuiEvent};

#[cfg(feature = "native")]
pub use rpc::HttpTransport;

/// Initialize stderr logging for native binaries.
///
/// `RUST_LOG` overrides `level`. Records emitted through the `log` facade
/// by this crate are bridged into the subscriber.
#[cfg(feature = "native")]
pub fn init_logging(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

//! Profiles CLI - inspect the Sui profile registry
//!
//! # Commands
//!
//! ```bash
//! profiles state                        # Rebuild the profile list from events
//! profiles profile-tx Alice "bio"       # Print the creat_profile transaction JSON
//! profiles wait <digest>                # Wait until a transaction is finalized
//! profiles events --limit 10            # Raw ProfileCreated events (debug)
//! ```
//!
//! Configuration comes from flags, then the environment (`SUI_NETWORK`,
//! `SUI_RPC_URL`, `PROFILES_PACKAGE_ID`, `PROFILES_STATE_ID`), then a
//! `.env` file.

use clap::{Parser, Subcommand};
use profiles::config::{
    layered_lookup, read_env_file, ENV_NETWORK, ENV_PACKAGE_ID, ENV_RPC_URL, ENV_STATE_ID,
};
use profiles::error::CliResult;
use profiles::{
    create_profile_tx, init_logging, profile_events_query, query_state, HttpTransport,
    NetworkConfig, SuiClient,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "profiles")]
#[command(about = "Read and build transactions for the Sui profile registry", long_about = None)]
struct Cli {
    /// Network: mainnet, testnet, devnet, localnet
    #[arg(long, global = true)]
    network: Option<String>,

    /// Full node JSON-RPC URL (default: the network's public node)
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Published package id
    #[arg(long, global = true)]
    package_id: Option<String>,

    /// Shared State object id
    #[arg(long, global = true)]
    state_id: Option<String>,

    /// Read configuration from this file instead of ./.env
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild application state from ProfileCreated events
    State {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the creat_profile transaction and print it as JSON
    ProfileTx {
        /// Profile name
        name: String,
        /// Profile description
        description: String,
    },

    /// Wait until a transaction digest is finalized
    Wait {
        /// Transaction digest
        digest: String,

        /// Delay between polls in milliseconds
        #[arg(long, default_value_t = profiles::rpc::DEFAULT_POLL_INTERVAL_MS)]
        poll_interval: u32,

        /// Give up after this many milliseconds
        #[arg(long, default_value_t = profiles::rpc::DEFAULT_TIMEOUT_MS)]
        timeout: u32,
    },

    /// Print raw ProfileCreated events
    Events {
        /// Page size
        #[arg(short, long)]
        limit: Option<u32>,

        /// Newest first
        #[arg(long)]
        descending: bool,
    },
}

impl Cli {
    /// Configuration flags that were given, keyed like their env variables.
    fn config_flags(&self) -> HashMap<String, String> {
        [
            (ENV_NETWORK, &self.network),
            (ENV_RPC_URL, &self.rpc_url),
            (ENV_PACKAGE_ID, &self.package_id),
            (ENV_STATE_ID, &self.state_id),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key.to_string(), v)))
        .collect()
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = load_config(&cli)?;
    log::debug!("Using {} at {}", config.network, config.rpc_url);

    match cli.command {
        Commands::State { ref output } => cmd_state(&config, output.as_deref()).await,
        Commands::ProfileTx {
            ref name,
            ref description,
        } => cmd_profile_tx(&config, name, description),
        Commands::Wait {
            ref digest,
            poll_interval,
            timeout,
        } => cmd_wait(&config, digest, poll_interval, timeout).await,
        Commands::Events { limit, descending } => cmd_events(&config, limit, descending).await,
    }
}

/// Flags win over the process environment, which wins over the env file.
fn load_config(cli: &Cli) -> CliResult<NetworkConfig> {
    let file_vars = match &cli.env_file {
        Some(path) => read_env_file(path)?,
        None => {
            // Load .env file (if present)
            dotenvy::dotenv().ok();
            HashMap::new()
        }
    };

    let flags = cli.config_flags();
    let config = NetworkConfig::from_lookup(layered_lookup(
        &flags,
        |key| std::env::var(key).ok(),
        &file_vars,
    ))?;

    Ok(config)
}

fn client(config: &NetworkConfig) -> CliResult<SuiClient<HttpTransport>> {
    Ok(SuiClient::new(HttpTransport::new(&config.rpc_url)?))
}

async fn cmd_state(config: &NetworkConfig, output: Option<&Path>) -> CliResult<()> {
    eprintln!("🔎 Querying {}", config.profile_event_type());

    let state = query_state(&client(config)?, config).await?;
    eprintln!("✅ {} profiles", state.users.len());

    let json = serde_json::to_string_pretty(&state)?;
    write_output(&json, output)
}

fn cmd_profile_tx(config: &NetworkConfig, name: &str, description: &str) -> CliResult<()> {
    let tx = create_profile_tx(config, name, description);
    println!("{}", serde_json::to_string_pretty(&tx)?);
    Ok(())
}

async fn cmd_wait(config: &NetworkConfig, digest: &str, poll_interval: u32, timeout: u32) -> CliResult<()> {
    eprintln!("⏳ Waiting for {}", digest);

    let client = client(config)?
        .with_poll_interval(poll_interval)
        .with_timeout(timeout);
    let block = client.wait_for_transaction_block(digest).await?;

    eprintln!("✅ Finalized");
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

async fn cmd_events(config: &NetworkConfig, limit: Option<u32>, descending: bool) -> CliResult<()> {
    let mut query = profile_events_query(config);
    if let Some(limit) = limit {
        query = query.with_limit(limit);
    }
    if descending {
        query = query.descending();
    }

    let page = client(config)?.query_events(&query).await?;
    eprintln!(
        "📄 {} events{}",
        page.data.len(),
        if page.has_next_page { " (more available)" } else { "" }
    );

    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> CliResult<()> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_flags_only_given_values() {
        let cli = Cli::try_parse_from([
            "profiles",
            "--network",
            "devnet",
            "--state-id",
            "0x42",
            "profile-tx",
            "Alice",
            "bio",
        ])
        .unwrap();

        let flags = cli.config_flags();
        assert_eq!(flags.len(), 2);
        assert_eq!(flags.get(ENV_NETWORK).map(String::as_str), Some("devnet"));
        assert_eq!(flags.get(ENV_STATE_ID).map(String::as_str), Some("0x42"));
        assert!(!flags.contains_key(ENV_PACKAGE_ID));
    }

    #[test]
    fn test_flags_override_env_file() {
        let cli = Cli::try_parse_from(["profiles", "--network", "devnet", "state"]).unwrap();
        let file: HashMap<String, String> = [
            (ENV_NETWORK.to_string(), "mainnet".to_string()),
            (ENV_PACKAGE_ID.to_string(), "0x1".to_string()),
            (ENV_STATE_ID.to_string(), "0x2".to_string()),
        ]
        .into_iter()
        .collect();

        let flags = cli.config_flags();
        let config = NetworkConfig::from_lookup(layered_lookup(&flags, |_| None, &file)).unwrap();
        assert_eq!(config.network, profiles::Network::Devnet);
        assert!(config.package_id.as_str().ends_with("01"));
    }
}

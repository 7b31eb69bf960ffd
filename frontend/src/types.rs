//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Log Types** - Activity log shown in the UI
//! - **Wallet Types** - Connected wallet info
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use profiles::{ConfigError, ExecutionError, QueryError};

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            LogLevel::Info => "ℹ️",
            LogLevel::Success => "✅",
            LogLevel::Error => "❌",
            LogLevel::Warning => "⚠️",
        }
    }
}

/// A single activity log entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Append `entry`, dropping the oldest entries beyond `max`.
pub fn append_capped(logs: &mut Vec<LogEntry>, entry: LogEntry, max: usize) {
    logs.push(entry);
    if logs.len() > max {
        let excess = logs.len() - max;
        logs.drain(..excess);
    }
}

// =============================================================================
// Wallet Types
// =============================================================================

/// Connected wallet information.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    /// Sui address (0x-prefixed hex)
    pub address: String,
    /// Account label, if the wallet exposes one
    pub name: Option<String>,
    /// Wallet name (e.g. "Sui Wallet", "Suiet")
    pub source: String,
}

impl WalletInfo {
    /// `0x1234…abcd` form for the header.
    pub fn short_address(&self) -> String {
        let addr = &self.address;
        let chars = addr.chars().count();
        if chars <= 10 {
            return addr.clone();
        }
        let head: String = addr.chars().take(6).collect();
        let tail: String = addr.chars().skip(chars - 4).collect();
        format!("{}...{}", head, tail)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Wallet connection failed.
    Wallet(String),
    /// Profile query failed.
    Query(String),
    /// Transaction failed.
    Transaction(String),
    /// Network/HTTP error.
    Network(String),
    /// Invalid configuration or data.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Wallet(msg) => write!(f, "Wallet error: {}", msg),
            AppError::Query(msg) => write!(f, "Query error: {}", msg),
            AppError::Transaction(msg) => write!(f, "Transaction error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Index(rpc) => AppError::Network(rpc.to_string()),
            payload @ QueryError::Payload { .. } => AppError::Query(payload.to_string()),
        }
    }
}

impl From<ExecutionError> for AppError {
    fn from(err: ExecutionError) -> Self {
        match err {
            ExecutionError::Wallet(msg) | ExecutionError::Rejected(msg) => AppError::Wallet(msg),
            other => AppError::Transaction(other.to_string()),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use profiles::RpcError;

    #[test]
    fn test_append_capped_drops_oldest() {
        let mut logs = Vec::new();
        for i in 0..5 {
            append_capped(&mut logs, LogEntry::new(LogLevel::Info, format!("m{}", i), "12:00:00"), 3);
        }
        let messages: Vec<_> = logs.iter().map(|l| l.message.as_str()).collect();
        assert_eq!(messages, ["m2", "m3", "m4"]);
    }

    #[test]
    fn test_short_address() {
        let wallet = WalletInfo {
            address: "0x7d20dcdb2bca4f508ea9613994683eb4e76e9c4ed371169677c1be02aaf0b58e".into(),
            name: None,
            source: "Sui Wallet".into(),
        };
        assert_eq!(wallet.short_address(), "0x7d20...b58e");

        let short = WalletInfo { address: "0x6".into(), ..wallet.clone() };
        assert_eq!(short.short_address(), "0x6");

        let unicode = WalletInfo { address: "0xé1234567890àbcd".into(), ..wallet };
        assert_eq!(unicode.short_address(), "0xé123...àbcd");
    }

    #[test]
    fn test_error_mapping() {
        let err: AppError = QueryError::Index(RpcError::Http("offline".into())).into();
        assert_eq!(err, AppError::Network("HTTP request failed: offline".into()));

        let err: AppError = ExecutionError::Rejected("user declined".into()).into();
        assert_eq!(err, AppError::Wallet("user declined".into()));
        assert!(err.to_string().starts_with("Wallet error"));
    }
}

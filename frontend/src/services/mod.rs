//! Chain and wallet services.
//!
//! # Services
//!
//! - [`sui`] - Full node JSON-RPC (profile list, confirmation wait)
//! - [`wallet`] - Wallet Standard integration (connect, sign & execute)
//!
//! # JavaScript Bindings
//!
//! `src/js/wallet.js` wraps `@mysten/wallet-standard` and `@mysten/sui`.

pub mod sui;
pub mod wallet;

pub use sui::*;
pub use wallet::*;

//! Sui Profiles - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend listing the profiles registered by the `manage`
//! package and letting a connected wallet create new ones.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (wallet connection)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── CreateProfileForm                                      │
//! │  ├── ProfileList                                            │
//! │  └── LogsPanel (when there is activity)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (LogEntry, WalletInfo, AppError)
//! - [`hooks`] - Reactive wrapper around the transaction executor
//! - [`components`] - UI components (Header, ProfileList, etc.)
//! - [`services`] - Full node and wallet access

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod hooks;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Logs
    LogEntry, LogLevel,
    // Wallet
    WalletInfo,
    // Errors
    AppError, AppResult,
};

pub use hooks::use_sign_and_execute_transaction;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (wallet, set_wallet) = create_signal(None::<WalletInfo>);
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());
    let (refresh, set_refresh) = create_signal(0u32);

    view! {
        <Header wallet=wallet set_wallet=set_wallet set_logs=set_logs/>

        <div class="container">
            <Hero/>

            <CreateProfileForm wallet=wallet set_logs=set_logs set_refresh=set_refresh/>

            <ProfileList refresh=refresh set_logs=set_logs/>

            <Show
                when=move || !logs.get().is_empty()
                fallback=|| view! { }
            >
                <LogsPanel logs=logs set_logs=set_logs/>
            </Show>
        </div>

        <Footer/>
    }
}

//! Footer component

use leptos::*;

use crate::{PACKAGE_ID, RPC_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <span class="footer-link" title=PACKAGE_ID>"Package " {PACKAGE_ID}</span>
                <a href=RPC_URL class="footer-link" target="_blank">
                    "Full node"
                </a>
                <a href="https://docs.sui.io" class="footer-link" target="_blank">
                    "Sui Docs"
                </a>
            </div>
        </footer>
    }
}

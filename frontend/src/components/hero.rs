//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Sui Profiles"</h1>
            <p class="subtitle">
                "Every profile below is rebuilt from on-chain ProfileCreated events. "
                "Connect a wallet to publish your own."
            </p>
        </div>
    }
}

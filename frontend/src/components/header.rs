use leptos::*;

use crate::components::push_log;
use crate::services::connect_wallet;
use crate::{LogEntry, LogLevel, WalletInfo, NETWORK};

#[component]
pub fn Header(
    wallet: ReadSignal<Option<WalletInfo>>,
    set_wallet: WriteSignal<Option<WalletInfo>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let (connecting, set_connecting) = create_signal(false);

    let on_wallet_click = move |_| {
        if wallet.get().is_some() || connecting.get() {
            return;
        }
        set_connecting.set(true);

        spawn_local(async move {
            match connect_wallet().await {
                Ok(info) => {
                    push_log(set_logs, LogLevel::Success, format!("Wallet connected: {}", info.short_address()));
                    set_wallet.set(Some(info));
                }
                Err(e) => {
                    log::error!("❌ Wallet connection failed: {}", e);
                    push_log(set_logs, LogLevel::Error, e.to_string());
                }
            }
            set_connecting.set(false);
        });
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"SUI PROFILES"</a>
                <span class="badge">{NETWORK}</span>
            </div>
            <div class="header-right">
                <div
                    class="wallet-status"
                    class:connected=move || wallet.get().is_some()
                    on:click=on_wallet_click
                    style="cursor: pointer;"
                >
                    <span class="wallet-dot" class:connected=move || wallet.get().is_some()></span>
                    <span id="walletText">
                        {move || match wallet.get() {
                            Some(info) => info.short_address(),
                            None if connecting.get() => "Connecting...".to_string(),
                            None => "Connect Wallet".to_string(),
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}

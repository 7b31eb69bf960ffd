//! Profile creation form.

use leptos::*;

use profiles::{create_profile_tx, ExecuteOutcome};

use crate::components::push_log;
use crate::hooks::use_sign_and_execute_transaction;
use crate::{network_config, AppError, LogEntry, LogLevel, WalletInfo, WAIT_FOR_TX};

#[component]
pub fn CreateProfileForm(
    wallet: ReadSignal<Option<WalletInfo>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
    set_refresh: WriteSignal<u32>,
) -> impl IntoView {
    let config = match network_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Invalid network configuration: {}", e);
            return view! { <div class="error">{e.to_string()}</div> }.into_view();
        }
    };

    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());

    let tx_config = config.clone();
    let (executor, is_loading) = use_sign_and_execute_transaction(
        &config,
        move |(name, description): (String, String)| create_profile_tx(&tx_config, name, description),
        WAIT_FOR_TX,
    );

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let profile_name = name.get().trim().to_string();
        if profile_name.is_empty() {
            push_log(set_logs, LogLevel::Warning, "Profile name is required");
            return;
        }

        let chain = executor
            .handle_sign_and_execute_transaction((profile_name.clone(), description.get()))
            .before_execute(move || async move {
                push_log(set_logs, LogLevel::Info, format!("Creating profile \"{}\"...", profile_name));
                Ok(())
            })
            .on_success(move |output| async move {
                push_log(set_logs, LogLevel::Success, format!("Profile created! Digest: {}", output.digest));
                set_name.set(String::new());
                set_description.set(String::new());
                set_refresh.update(|n| *n += 1);
            })
            .on_error(move |error| {
                let error = AppError::from(error);
                log::error!("❌ {}", error);
                push_log(set_logs, LogLevel::Error, error.to_string());
            })
            .on_settled(|output| async move {
                log::debug!("Profile transaction settled: {:?}", output.map(|o| o.digest));
            });

        spawn_local(async move {
            if chain.on_execute().await == ExecuteOutcome::Skipped {
                push_log(set_logs, LogLevel::Warning, "A transaction is already in progress");
            }
        });
    };

    let submit_disabled = move || is_loading.get() || wallet.get().is_none();

    view! {
        <form class="create-profile" on:submit=on_submit>
            <div class="section-title">"✍️ Create your profile"</div>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="btn btn-primary" disabled=submit_disabled>
                {move || if is_loading.get() {
                    "⏳ Submitting..."
                } else if wallet.get().is_none() {
                    "Connect a wallet first"
                } else {
                    "Create profile"
                }}
            </button>
        </form>
    }
    .into_view()
}

//! Profile list, rebuilt from chain events on every refresh.

use leptos::*;

use crate::components::push_log;
use crate::services::load_profiles;
use crate::{LogEntry, LogLevel};

#[component]
pub fn ProfileList(
    /// Bumped after each confirmed transaction to reload the list.
    refresh: ReadSignal<u32>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let profiles = create_local_resource(
        move || refresh.get(),
        move |_| async move {
            let result = load_profiles().await;
            match &result {
                Ok(state) => log::info!("✅ {} profiles loaded", state.len()),
                Err(e) => {
                    log::error!("❌ Failed to load profiles: {}", e);
                    push_log(set_logs, LogLevel::Error, e.to_string());
                }
            }
            result
        },
    );

    view! {
        <div class="profiles-section">
            <div class="section-header">
                <div class="section-title">"👥 Profiles"</div>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| profiles.refetch()
                >
                    "Refresh"
                </button>
            </div>
            <Suspense fallback=|| view! { <div class="loading">"Loading profiles..."</div> }>
                {move || profiles.get().map(|result| match result {
                    Ok(state) if state.is_empty() => view! {
                        <div class="empty">"No profiles yet."</div>
                    }.into_view(),
                    Ok(state) => view! {
                        <ul class="profile-list">
                            {state.users.into_iter().map(|profile| view! {
                                <li class="profile-card">
                                    <div class="profile-name">{profile.name}</div>
                                    <div class="profile-description">{profile.description}</div>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_view(),
                    Err(e) => view! {
                        <div class="error">{e.to_string()}</div>
                    }.into_view(),
                })}
            </Suspense>
        </div>
    }
}

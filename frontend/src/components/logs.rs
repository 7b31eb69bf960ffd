//! Activity log: wallet, query and transaction events as they happen.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::types::append_capped;
use crate::{LogEntry, LogLevel, MAX_LOG_ENTRIES};

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

/// Current local time as HH:MM:SS.
fn now_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-GB")
        .as_string()
        .unwrap_or_default()
}

/// Append an entry to the activity log.
pub fn push_log(set_logs: WriteSignal<Vec<LogEntry>>, level: LogLevel, message: impl Into<String>) {
    let entry = LogEntry::new(level, message, now_timestamp());
    set_logs.update(|logs| append_capped(logs, entry, MAX_LOG_ENTRIES));
}

/// Activity log panel
#[component]
pub fn LogsPanel(
    /// Signal for logs data
    logs: ReadSignal<Vec<LogEntry>>,
    /// Set logs signal (for clearing)
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    // Reference to the logs content div for auto-scroll
    let logs_container = create_node_ref::<leptos::html::Div>();

    // Auto-scroll to bottom when logs change
    create_effect(move |_| {
        let _ = logs.get();

        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="logs-panel">
            <div class="logs-header">
                <span class="logs-title">"📋 Activity"</span>
                <button
                    class="logs-clear"
                    on:click=move |_| set_logs.set(vec![])
                >
                    "Clear"
                </button>
            </div>
            <div class="logs-content" node_ref=logs_container>
                <For
                    each=move || logs.get().into_iter().enumerate()
                    key=|(i, entry)| (*i, entry.timestamp.clone())
                    children=move |(_, entry)| {
                        view! {
                            <div class=format!("log-entry {}", entry.level.css_class())>
                                <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                {entry.level.emoji()} " " {entry.message.clone()}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

//! Loading and error panels shared by every data-backed page.
//!
//! DESIGN
//! ======
//! A page shows exactly one of loading, error with retry, or its content.
//! These components cover the first two so every page words them the same.

use leptos::prelude::*;

/// Spinner row shown while a request is in flight.
#[component]
pub fn LoadingPanel(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="status-panel status-panel--loading" role="status" aria-live="polite">
            <span class="status-panel__spinner" aria-hidden="true"></span>
            <span class="status-panel__text">{label}</span>
        </div>
    }
}

/// Error message with a retry button.
#[component]
pub fn ErrorPanel(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="status-panel status-panel--error" role="alert">
            <span class="status-panel__text">{message}</span>
            <button class="btn status-panel__retry" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}

/// Neutral message for a successful but empty result.
#[component]
pub fn EmptyPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="status-panel status-panel--empty">
            <span class="status-panel__text">{message}</span>
        </div>
    }
}

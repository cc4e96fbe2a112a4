//! Loading, degraded-data and error states.

use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>"Loading properties..."</p>
        </div>
    }
}

/// Shown above the layout while the sample listings are on screen.
#[component]
pub fn DegradedBanner(reason: String, version: u32) -> impl IntoView {
    view! {
        <div class="degraded-banner" role="status">
            <strong>"⚠️ Showing sample listings. "</strong>
            <span>"The listings sheet could not be loaded: " {reason}</span>
            <span class="sample-version">" (sample set v" {version} ")"</span>
        </div>
    }
}

/// Full-screen failure with a manual retry.
#[component]
pub fn ErrorScreen(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-screen">
            <h2>"Error Loading Properties"</h2>
            <p>{message}</p>
            <button class="btn btn-primary" on:click=move |_| on_retry.call(())>
                "Try Again"
            </button>
        </div>
    }
}

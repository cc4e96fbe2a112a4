//! Footer component

use leptos::*;
use listings::DataOrigin;

use crate::sheet_url;

#[component]
pub fn Footer(#[prop(into)] origin: Signal<Option<DataOrigin>>) -> impl IntoView {
    let source_label = move || match origin.get() {
        Some(DataOrigin::Live) => "Google Sheets",
        Some(DataOrigin::Fallback { .. }) => "Sample data",
        None => "…",
    };

    view! {
        <footer>
            <div>"Data: " {source_label} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href=sheet_url() class="footer-link" target="_blank">
                    "Source sheet"
                </a>
            </div>
        </footer>
    }
}

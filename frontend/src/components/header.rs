use leptos::*;
use listings::{AppState, ViewMode};

use crate::APP_NAME;

#[component]
pub fn Header(
    #[prop(into)] is_mobile: Signal<bool>,
    state: RwSignal<AppState>,
    #[prop(into)] visible_count: Signal<usize>,
) -> impl IntoView {
    let view_mode = move || state.with(|s| s.view_mode);
    let collapsed = move || state.with(|s| s.sidebar_collapsed);

    let on_toggle_view = move |_| {
        state.update(|s| s.toggle_view());
        log::debug!("View switched to {:?}", state.with_untracked(|s| s.view_mode));
    };

    let on_toggle_sidebar = move |_| state.update(|s| s.toggle_sidebar());

    view! {
        <header>
            <div class="header-left">
                <span class="logo">"🏠 " {APP_NAME}</span>
                <span class="badge">{move || format!("{} נכסים", visible_count.get())}</span>
            </div>
            <div class="header-right">
                <Show
                    when=move || is_mobile.get()
                    fallback=move || view! {
                        <button class="btn btn-secondary" on:click=on_toggle_sidebar>
                            {move || if collapsed() { "◀ הרחב" } else { "▶ כווץ" }}
                        </button>
                    }
                >
                    <button class="btn btn-secondary" on:click=on_toggle_view>
                        {move || match view_mode() {
                            ViewMode::Map => "🏠 נכסים",
                            ViewMode::List => "🗺️ מפה",
                        }}
                    </button>
                </Show>
            </div>
        </header>
    }
}

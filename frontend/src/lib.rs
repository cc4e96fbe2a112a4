//! Listings Viewer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that loads the permit-request sheet in the
//! browser and shows it as a map and a filterable list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title, view / sidebar toggle)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DegradedBanner (sample data only)                           │
//! ├──────────────────────────────┬──────────────────────────────┤
//! │  MapView                      │  PropertyList                │
//! │  (markers, popup)             │  (search, filters, cards)    │
//! ├──────────────────────────────┴──────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//!   PropertyDetail (modal)      ErrorScreen (strict policy only)
//! ```
//!
//! All UI state lives in one `RwSignal<AppState>`; the record set comes
//! from a local resource that re-runs when "Try Again" is pressed.
//!
//! # Modules
//!
//! - [`types`] - Common types (FilterDraft, AppError)
//! - [`components`] - UI components (Header, MapView, PropertyList, etc.)
//! - [`services`] - Sheet loading

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use listings::{usage_categories, AppState, DataOrigin, PropertyRecord, ViewMode};
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, FilterDraft};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🏠 Listings Viewer - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="he" dir="rtl"/>
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

/// Current window width against the mobile breakpoint.
fn window_is_mobile() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(is_mobile_width)
        .unwrap_or(false)
}

#[component]
fn MainContent() -> impl IntoView {
    let is_mobile = create_rw_signal(window_is_mobile());
    let _resize = window_event_listener(ev::resize, move |_| {
        let mobile = window_is_mobile();
        if mobile != is_mobile.get_untracked() {
            is_mobile.set(mobile);
        }
    });

    // Global state for the application
    let state = create_rw_signal(AppState::initial(is_mobile.get_untracked()));

    // Bumped by "Try Again" to re-run ingestion
    let (attempt, set_attempt) = create_signal(0u32);
    let data = create_local_resource(
        move || attempt.get(),
        |_| load_listings(sheet_url(), FALLBACK_POLICY),
    );

    let loading = Signal::derive(move || data.loading().get());
    let records = create_memo(move |_| {
        data.map(|result| match result {
            Ok(ingested) => ingested.records.clone(),
            Err(_) => Vec::new(),
        })
        .unwrap_or_default()
    });
    let origin = create_memo(move |_| {
        data.map(|result| result.as_ref().ok().map(|i| i.origin.clone()))
            .flatten()
    });
    let error = create_memo(move |_| data.map(|result| result.as_ref().err().cloned()).flatten());

    let categories = create_memo(move |_| records.with(|r| usage_categories(r)));
    let visible_count = Signal::derive(move || records.with(|r| state.with(|s| s.visible(r).len())));

    let retry = Callback::new(move |_: ()| {
        log::info!("Retrying listings load");
        state.update(|s| s.clear_selection());
        set_attempt.update(|n| *n += 1);
    });
    let close_detail = Callback::new(move |_: ()| state.update(|s| s.close_detail()));

    let map_hidden = move || is_mobile.get() && state.with(|s| s.view_mode != ViewMode::Map);
    let list_hidden = move || {
        if is_mobile.get() {
            state.with(|s| s.view_mode != ViewMode::List)
        } else {
            state.with(|s| s.sidebar_collapsed)
        }
    };

    view! {
        <Show
            when=move || error.with(|e| e.is_none())
            fallback=move || view! {
                <ErrorScreen
                    message=error.get().map(|e| e.to_string()).unwrap_or_default()
                    on_retry=retry
                />
            }
        >
            <div class="app-shell" class:mobile=move || is_mobile.get()>
                <Header is_mobile=is_mobile state=state visible_count=visible_count/>

                {move || match origin.get() {
                    Some(DataOrigin::Fallback { reason, version }) => {
                        Some(view! { <DegradedBanner reason=reason version=version/> })
                    }
                    _ => None,
                }}

                <div class="app-main">
                    <div
                        class="map-pane"
                        class:hidden=map_hidden
                        class:full=move || !is_mobile.get() && state.with(|s| s.sidebar_collapsed)
                    >
                        <MapView records=records state=state/>
                    </div>
                    <div class="list-pane" class:hidden=list_hidden>
                        <PropertyList
                            records=records
                            state=state
                            categories=categories
                            loading=loading
                        />
                    </div>
                </div>

                <Footer origin=origin/>
            </div>

            {move || {
                records
                    .with(|r| state.with(|s| s.detail(r).cloned()))
                    .map(|record: PropertyRecord| view! {
                        <PropertyDetail record=record on_close=close_detail/>
                    })
            }}
        </Show>
    }
}

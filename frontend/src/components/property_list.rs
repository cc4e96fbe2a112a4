//! Search box, filter panel and the cards for the visible listings.

use leptos::*;
use listings::{AppState, PropertyRecord};

use crate::{FilterPanel, LoadingSpinner, PropertyCard};

#[component]
pub fn PropertyList(
    #[prop(into)] records: Signal<Vec<PropertyRecord>>,
    state: RwSignal<AppState>,
    #[prop(into)] categories: Signal<Vec<String>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let visible = create_memo(move |_| {
        records.with(|r| {
            state.with(|s| s.visible(r).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    let filters_open = move || state.with(|s| s.filters_open);
    let filters_active = move || state.with(|s| s.criteria.is_active());

    let on_select = Callback::new(move |id: String| state.update(|s| s.select(id)));

    view! {
        <div class="property-list">
            <div class="search-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search properties..."
                    prop:value=move || state.with(|s| s.query.clone())
                    on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                />
                <button
                    class="filter-toggle"
                    class:open=filters_open
                    class:active=filters_active
                    on:click=move |_| state.update(|s| s.toggle_filters())
                >
                    "⚙️"
                </button>
            </div>

            <Show when=filters_open fallback=|| view! { }>
                <FilterPanel state=state categories=categories/>
            </Show>

            <div class="property-cards">
                {move || {
                    if loading.get() {
                        view! { <LoadingSpinner/> }.into_view()
                    } else if visible.with(|v| v.is_empty()) {
                        view! {
                            <div class="empty-state">
                                <p>"No properties found matching your criteria."</p>
                                <p class="hint">"Try adjusting your filters or search terms."</p>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <For
                                each=move || visible.get().into_iter().enumerate()
                                key=|(idx, record)| (*idx, record.id.clone())
                                children=move |(_, record): (usize, PropertyRecord)| {
                                    let id = record.id.clone();
                                    let selected = Signal::derive(move || {
                                        state.with(|s| s.selected_id.as_deref() == Some(id.as_str()))
                                    });
                                    view! {
                                        <PropertyCard record=record selected=selected on_select=on_select/>
                                    }
                                }
                            />
                        }
                        .into_view()
                    }
                }}
            </div>
        </div>
    }
}

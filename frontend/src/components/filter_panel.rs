//! Usage and area filters.
//!
//! Every edit replaces the whole criteria in [`AppState`]; nothing is
//! applied field by field.

use leptos::*;
use listings::AppState;

use crate::FilterDraft;

#[component]
pub fn FilterPanel(
    state: RwSignal<AppState>,
    #[prop(into)] categories: Signal<Vec<String>>,
) -> impl IntoView {
    let draft = create_rw_signal(FilterDraft::from_criteria(
        &state.with_untracked(|s| s.criteria.clone()),
    ));

    let apply = move |next: FilterDraft| {
        let criteria = next.to_criteria();
        draft.set(next);
        log::debug!("Filters applied: {:?}", criteria);
        state.update(|s| s.apply_filters(criteria));
    };

    let on_reset = move |_| {
        draft.set(FilterDraft::default());
        state.update(|s| s.reset_filters());
    };

    view! {
        <div class="filter-panel">
            <div class="filter-grid">
                <label class="filter-field">
                    <span>"Property Type"</span>
                    <select
                        prop:value=move || draft.with(|d| d.usage.clone())
                        on:change=move |ev| {
                            let mut next = draft.get_untracked();
                            next.usage = event_target_value(&ev);
                            apply(next);
                        }
                    >
                        <option value="">"All Types"</option>
                        <For
                            each=move || categories.get()
                            key=|category| category.clone()
                            children=move |category: String| {
                                let value = category.clone();
                                let is_current = move || draft.with(|d| d.usage == value);
                                view! {
                                    <option value=category.clone() selected=is_current>
                                        {category}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>

                <label class="filter-field">
                    <span>"Min Area (m²)"</span>
                    <input
                        type="number"
                        min="0"
                        step="10"
                        placeholder="0"
                        prop:value=move || draft.with(|d| d.min_area.clone())
                        on:input=move |ev| {
                            let mut next = draft.get_untracked();
                            next.min_area = event_target_value(&ev);
                            apply(next);
                        }
                    />
                </label>

                <label class="filter-field">
                    <span>"Max Area (m²)"</span>
                    <input
                        type="number"
                        min="0"
                        step="10"
                        placeholder="∞"
                        prop:value=move || draft.with(|d| d.max_area.clone())
                        on:input=move |ev| {
                            let mut next = draft.get_untracked();
                            next.max_area = event_target_value(&ev);
                            apply(next);
                        }
                    />
                </label>
            </div>

            <div class="filter-actions">
                <button class="btn btn-secondary" on:click=on_reset>"Reset"</button>
            </div>
        </div>
    }
}

use leptos::*;
use listings::{format_number, PropertyRecord};

#[component]
pub fn PropertyCard(
    record: PropertyRecord,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<String>,
) -> impl IntoView {
    let kind = record.usage_kind();
    let id = record.id.clone();
    let units = record.units_summary();
    let event_date = record.event_date_label();
    let event = if event_date.is_empty() {
        record.event.clone()
    } else {
        format!("{} • {}", record.event, event_date)
    };

    view! {
        <div
            class="property-card"
            class:selected=move || selected.get()
            on:click=move |_| on_select.call(id.clone())
        >
            <div class="property-card-header">
                <div class="property-card-title">{record.address.clone()}</div>
                <span class=format!("usage-badge {}", kind.css_class())>
                    {record.main_usage.clone()}
                </span>
            </div>
            <div class="property-card-details">
                <span>{format!("{} m²", format_number(record.main_area))}</span>
                {units.map(|u| view! { <span>" • " {u}</span> })}
            </div>
            {(!event.is_empty()).then(|| view! { <div class="property-card-event">{event}</div> })}
            <div class="property-card-description">{record.request_description.clone()}</div>
        </div>
    }
}

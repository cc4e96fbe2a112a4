//! Detail modal for a single listing.

use leptos::*;
use listings::{format_number, PropertyRecord};

const NOT_SPECIFIED: &str = "Not specified";

fn or_unspecified(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    }
}

/// "84.98 m²", or "Not specified" for zero.
fn measure(value: f64, unit: &str) -> String {
    if value > 0.0 {
        format!("{} {}", format_number(value), unit)
    } else {
        NOT_SPECIFIED.to_string()
    }
}

#[component]
fn Fact(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-fact">
            <p class="detail-label">{label}</p>
            <p class="detail-value">{value}</p>
        </div>
    }
}

#[component]
pub fn PropertyDetail(record: PropertyRecord, on_close: Callback<()>) -> impl IntoView {
    let days = if record.days_from_submission > 0.0 {
        format_number(record.days_from_submission)
    } else {
        NOT_SPECIFIED.to_string()
    };
    let block_parcel = or_unspecified(&record.block_parcel());

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.call(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{record.address.clone()}</h2>
                    <button class="modal-close" on:click=move |_| on_close.call(())>"✕"</button>
                </div>

                <div class="modal-content">
                    <div class="detail-key-facts">
                        <Fact label="Property Type" value=or_unspecified(&record.main_usage)/>
                        <Fact label="Total Area" value=format!("{} m²", format_number(record.total_area()))/>
                        <Fact
                            label="Units"
                            value=record.units_summary().unwrap_or_else(|| "Not applicable".to_string())
                        />
                        <Fact label="Event Date" value=or_unspecified(&record.event_date_label())/>
                    </div>

                    <div class="detail-section">
                        <h3>"Property Details"</h3>
                        <div class="detail-grid">
                            <Fact label="Request Description" value=or_unspecified(&record.request_description)/>
                            <Fact label="Requester" value=or_unspecified(&record.requester_details)/>
                            <Fact label="Event" value=or_unspecified(&record.event)/>
                            <Fact label="Permit Number" value=or_unspecified(&record.permit_number)/>
                            <Fact label="Main Area" value=measure(record.main_area, "m²")/>
                            <Fact label="Service Area" value=measure(record.service_area, "m²")/>
                            <Fact label="Height" value=measure(record.height, "m")/>
                            <Fact label="Days From Submission" value=days/>
                        </div>
                    </div>

                    <div class="detail-section">
                        <h3>"Location Information"</h3>
                        <div class="detail-grid">
                            <Fact label="City" value=or_unspecified(&record.city)/>
                            <Fact label="Street" value=or_unspecified(&record.street_name)/>
                            <Fact label="House Number" value=or_unspecified(&record.house_number)/>
                            <Fact label="Block/Parcel" value=block_parcel/>
                            <Fact
                                label="Coordinates"
                                value=format!("📍 {}, {}", record.latitude, record.longitude)
                            />
                        </div>
                    </div>
                </div>

                <div class="modal-footer">
                    <button class="btn btn-secondary" on:click=move |_| on_close.call(())>
                        "‹ Back to list"
                    </button>
                    <a
                        class="btn btn-primary"
                        href=record.google_maps_url()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "📍 View on Google Maps"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_unspecified() {
        assert_eq!(or_unspecified("מגורים"), "מגורים");
        assert_eq!(or_unspecified("  "), NOT_SPECIFIED);
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure(84.98, "m²"), "84.98 m²");
        assert_eq!(measure(250.0, "m²"), "250 m²");
        assert_eq!(measure(0.0, "m"), NOT_SPECIFIED);
    }
}

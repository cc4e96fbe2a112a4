//! SVG map of the visible listings.
//!
//! Markers are projected with [`Projection`] onto a fixed-size surface that
//! scales with its container, over OpenStreetMap tiles placed with the same
//! projection. Clicking a marker focuses it and opens a popup;
//! "View details" opens the detail modal.

use leptos::*;
use listings::{
    AppState, MapMarker, Projection, PropertyRecord, Tile, UsageKind, Viewport, OSM_TILE_URL,
};

use crate::{MAP_HEIGHT, MAP_PADDING, MAP_WIDTH, MARKER_RADIUS, SELECTED_MARKER_RADIUS};

#[component]
pub fn MapView(
    #[prop(into)] records: Signal<Vec<PropertyRecord>>,
    state: RwSignal<AppState>,
) -> impl IntoView {
    let markers = create_memo(move |_| records.with(|r| state.with(|s| s.visible_markers(r))));
    let selected_id = create_memo(move |_| state.with(|s| s.selected_id.clone()));

    let projection = create_memo(move |_| {
        let viewport = markers.with(|m| Viewport::fit(m, selected_id.get().as_deref()));
        Projection::new(&viewport, MAP_WIDTH, MAP_HEIGHT, MAP_PADDING)
    });

    let tiles = create_memo(move |_| projection.with(|p| p.tiles()));

    // Marker currently showing a popup, if it is still visible
    let focused = create_memo(move |_| {
        let id = selected_id.get()?;
        markers.with(|m| m.iter().find(|marker| marker.id == id).cloned())
    });

    view! {
        <div class="map-container">
            <svg
                class="map-surface"
                viewBox=format!("0 0 {} {}", MAP_WIDTH, MAP_HEIGHT)
                preserveAspectRatio="xMidYMid meet"
            >
                <rect class="map-background" width=MAP_WIDTH height=MAP_HEIGHT/>
                <g class="map-tiles">
                    <For
                        each=move || tiles.get()
                        key=|tile| (tile.z, tile.x, tile.y, tile.left.to_bits(), tile.top.to_bits())
                        children=move |tile: Tile| {
                            view! {
                                <image
                                    href=tile.url(OSM_TILE_URL)
                                    x=tile.left
                                    y=tile.top
                                    width=tile.width
                                    height=tile.height
                                    preserveAspectRatio="none"
                                />
                            }
                        }
                    />
                </g>
                <For
                    each=move || markers.get().into_iter().enumerate()
                    key=|(idx, marker)| (*idx, marker.id.clone())
                    children=move |(_, marker): (usize, MapMarker)| {
                        let id = marker.id.clone();
                        let position = marker.position;
                        let color = UsageKind::classify(&marker.main_usage).color();
                        let is_selected = {
                            let id = id.clone();
                            move || selected_id.with(|s| s.as_deref() == Some(id.as_str()))
                        };
                        let on_click = move |_| state.update(|s| s.focus(id.clone()));

                        view! {
                            <circle
                                class="map-marker"
                                class:selected=is_selected.clone()
                                cx=move || projection.with(|p| p.project(position).0)
                                cy=move || projection.with(|p| p.project(position).1)
                                r={
                                    let is_selected = is_selected.clone();
                                    move || if is_selected() { SELECTED_MARKER_RADIUS } else { MARKER_RADIUS }
                                }
                                fill=color
                                on:click=on_click
                            />
                        }
                    }
                />
            </svg>

            <div class="map-attribution">
                "© "
                <a href="https://www.openstreetmap.org/copyright" target="_blank">
                    "OpenStreetMap"
                </a>
                " contributors"
            </div>

            {move || focused.get().map(|marker| view! { <MarkerPopup marker=marker state=state/> })}

            <Show when=move || markers.with(|m| m.is_empty()) fallback=|| view! { }>
                <div class="map-empty">"אין נכסים להצגה במפה"</div>
            </Show>
        </div>
    }
}

#[component]
fn MarkerPopup(marker: MapMarker, state: RwSignal<AppState>) -> impl IntoView {
    let kind = UsageKind::classify(&marker.main_usage);
    let id = marker.id.clone();

    let on_details = move |_| state.update(|s| s.select(id.clone()));
    let on_close = move |_| state.update(|s| s.clear_selection());

    view! {
        <div class="map-popup">
            <button class="popup-close" on:click=on_close>"✕"</button>
            <div class="popup-title">{marker.address}</div>
            <span class=format!("usage-badge {}", kind.css_class())>{marker.main_usage}</span>
            <button class="btn btn-primary" on:click=on_details>"View details"</button>
        </div>
    }
}

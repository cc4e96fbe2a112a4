//! Map markers and the geometry needed to draw them.
//!
//! Bounds are computed with a linear scan over the markers; there is no
//! spatial index.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::models::PropertyRecord;

/// Center used when there is nothing to fit (Ramat Gan area).
pub const DEFAULT_CENTER: (f64, f64) = (31.8667, 34.7431);

/// Latitude span shown around the default center.
const DEFAULT_SPAN: f64 = 0.04;

/// Latitude span shown around a selected marker (street level).
const SELECTED_SPAN: f64 = 0.004;

/// Smallest span for fitted bounds, so one marker is not infinitely zoomed.
const MIN_SPAN: f64 = 0.002;

/// OpenStreetMap raster tiles, `{z}/{x}/{y}` substituted by [`Tile::url`].
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Edge of a web map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

const MAX_TILE_ZOOM: u8 = 19;

/// Web Mercator stops at this latitude.
const MAX_MERCATOR_LAT: f64 = 85.0511;

// =============================================================================
// Markers
// =============================================================================

/// Map-displayable projection of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: String,
    /// (latitude, longitude)
    pub position: (f64, f64),
    pub address: String,
    pub main_usage: String,
}

impl From<&PropertyRecord> for MapMarker {
    fn from(record: &PropertyRecord) -> Self {
        Self {
            id: record.id.clone(),
            position: (record.latitude, record.longitude),
            address: record.address.clone(),
            main_usage: record.main_usage.clone(),
        }
    }
}

/// Markers for a record sequence, same order.
pub fn markers<'a, I>(records: I) -> Vec<MapMarker>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    records.into_iter().map(MapMarker::from).collect()
}

// =============================================================================
// Bounds & viewport
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Bounding box of all markers, `None` when there are none.
    pub fn from_markers(markers: &[MapMarker]) -> Option<Self> {
        let (first, rest) = markers.split_first()?;
        let (lat, lon) = first.position;
        let mut bounds = Bounds {
            min_lat: lat,
            max_lat: lat,
            min_lon: lon,
            max_lon: lon,
        };

        for marker in rest {
            let (lat, lon) = marker.position;
            bounds.min_lat = bounds.min_lat.min(lat);
            bounds.max_lat = bounds.max_lat.max(lat);
            bounds.min_lon = bounds.min_lon.min(lon);
            bounds.max_lon = bounds.max_lon.max(lon);
        }

        Some(bounds)
    }

    /// Square-ish box of `span` degrees of latitude around `center`.
    pub fn around(center: (f64, f64), span: f64) -> Self {
        let half_lat = span / 2.0;
        let half_lon = half_lat / center.0.to_radians().cos().max(0.01);
        Bounds {
            min_lat: center.0 - half_lat,
            max_lat: center.0 + half_lat,
            min_lon: center.1 - half_lon,
            max_lon: center.1 + half_lon,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn contains(&self, (lat, lon): (f64, f64)) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }

    /// Grow degenerate boxes to at least `min_span` on each axis.
    fn with_min_span(self, min_span: f64) -> Self {
        let (lat, lon) = self.center();
        let half_lat = ((self.max_lat - self.min_lat) / 2.0).max(min_span / 2.0);
        let half_lon = ((self.max_lon - self.min_lon) / 2.0).max(min_span / 2.0);
        Bounds {
            min_lat: lat - half_lat,
            max_lat: lat + half_lat,
            min_lon: lon - half_lon,
            max_lon: lon + half_lon,
        }
    }
}

/// What part of the map is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub bounds: Bounds,
}

impl Viewport {
    /// Focus the selected marker if it is shown, otherwise fit all markers,
    /// otherwise the default center.
    pub fn fit(markers: &[MapMarker], selected: Option<&str>) -> Self {
        let focused = selected.and_then(|id| markers.iter().find(|m| m.id == id));

        let bounds = match focused {
            Some(marker) => Bounds::around(marker.position, SELECTED_SPAN),
            None => match Bounds::from_markers(markers) {
                Some(bounds) => bounds.with_min_span(MIN_SPAN),
                None => Bounds::around(DEFAULT_CENTER, DEFAULT_SPAN),
            },
        };

        Self { bounds }
    }

    pub fn center(&self) -> (f64, f64) {
        self.bounds.center()
    }
}

// =============================================================================
// Projection
// =============================================================================

/// Maps coordinates onto a `width × height` surface, north up.
///
/// Longitude is scaled by the cosine of the center latitude so distances
/// look right at city scale; the viewport is centered inside the padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: (f64, f64),
    scale: f64,
    lon_factor: f64,
    width: f64,
    height: f64,
}

impl Projection {
    pub fn new(viewport: &Viewport, width: f64, height: f64, padding: f64) -> Self {
        let bounds = viewport.bounds;
        let center = bounds.center();
        let lon_factor = center.0.to_radians().cos().max(0.01);

        let lat_span = (bounds.max_lat - bounds.min_lat).max(f64::EPSILON);
        let lon_span = ((bounds.max_lon - bounds.min_lon) * lon_factor).max(f64::EPSILON);
        let usable_w = (width - 2.0 * padding).max(1.0);
        let usable_h = (height - 2.0 * padding).max(1.0);
        let scale = (usable_w / lon_span).min(usable_h / lat_span);

        Self {
            center,
            scale,
            lon_factor,
            width,
            height,
        }
    }

    /// Surface position (x, y) for a (latitude, longitude).
    pub fn project(&self, (lat, lon): (f64, f64)) -> (f64, f64) {
        let x = self.width / 2.0 + (lon - self.center.1) * self.lon_factor * self.scale;
        let y = self.height / 2.0 - (lat - self.center.0) * self.scale;
        (x, y)
    }

    /// (latitude, longitude) under a surface position.
    pub fn unproject(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let lon = self.center.1 + (x - self.width / 2.0) / (self.lon_factor * self.scale);
        let lat = self.center.0 - (y - self.height / 2.0) / self.scale;
        (lat, lon)
    }

    /// Tile zoom whose tiles are drawn closest to [`TILE_SIZE`] pixels wide.
    pub fn tile_zoom(&self) -> u8 {
        let px_per_degree = self.scale * self.lon_factor;
        let zoom = (360.0 * px_per_degree / TILE_SIZE).log2().round();
        zoom.clamp(0.0, f64::from(MAX_TILE_ZOOM)) as u8
    }

    /// Tiles covering the whole surface, row by row from the north-west.
    ///
    /// Tile corners go through [`Projection::project`], so the base map lines
    /// up with the markers at the corners; inside a tile the Mercator stretch
    /// is negligible at city scale.
    pub fn tiles(&self) -> Vec<Tile> {
        let z = self.tile_zoom();
        let n = f64::from(1u32 << z);
        let last = n - 1.0;

        let (north, west) = self.unproject((0.0, 0.0));
        let (south, east) = self.unproject((self.width, self.height));
        let to_index = |v: f64| v.floor().clamp(0.0, last) as u32;

        let (x0, x1) = (to_index(lon_to_tile(west, n)), to_index(lon_to_tile(east, n)));
        let (y0, y1) = (to_index(lat_to_tile(north, n)), to_index(lat_to_tile(south, n)));

        let mut tiles = Vec::new();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let (left, top) = self.project((
                    tile_to_lat(f64::from(y), n),
                    tile_to_lon(f64::from(x), n),
                ));
                let (right, bottom) = self.project((
                    tile_to_lat(f64::from(y) + 1.0, n),
                    tile_to_lon(f64::from(x) + 1.0, n),
                ));
                tiles.push(Tile {
                    z,
                    x,
                    y,
                    left,
                    top,
                    width: right - left,
                    height: bottom - top,
                });
            }
        }
        tiles
    }
}

// =============================================================================
// Base map tiles
// =============================================================================

/// One slippy-map tile and where it lands on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub z: u8,
    pub x: u32,
    pub y: u32,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Tile {
    pub fn url(&self, template: &str) -> String {
        template
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

fn lon_to_tile(lon: f64, n: f64) -> f64 {
    (lon + 180.0) / 360.0 * n
}

fn lat_to_tile(lat: f64, n: f64) -> f64 {
    let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * n
}

fn tile_to_lon(x: f64, n: f64) -> f64 {
    x / n * 360.0 - 180.0
}

fn tile_to_lat(y: f64, n: f64) -> f64 {
    (PI * (1.0 - 2.0 * y / n)).sinh().atan().to_degrees()
}

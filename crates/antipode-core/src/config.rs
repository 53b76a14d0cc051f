//! Widget configuration with defaults from `constants`.

use crate::constants::*;
use crate::geo::Coordinate;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    pub center: Coordinate,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: Coordinate::from(DEFAULT_CENTER),
            zoom: DEFAULT_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

/// Icon and label for one marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    pub title: String,
    pub popup: String,
    pub icon_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

impl MarkerStyle {
    fn pin(title: &str, popup: &str, icon_url: &str) -> Self {
        Self {
            title: title.to_string(),
            popup: popup.to_string(),
            icon_url: icon_url.to_string(),
            icon_size: ICON_SIZE,
            icon_anchor: ICON_ANCHOR,
            popup_anchor: POPUP_ANCHOR,
        }
    }

    pub fn self_marker() -> Self {
        Self::pin(SELF_TITLE, SELF_POPUP, SELF_ICON_URL)
    }

    pub fn antipode_marker() -> Self {
        Self::pin(ANTIPODE_TITLE, ANTIPODE_POPUP, ANTIPODE_ICON_URL)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: String,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: LINE_COLOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub map: MapConfig,
    pub debounce: Duration,
    pub self_marker: MarkerStyle,
    pub antipode_marker: MarkerStyle,
    pub line: LineStyle,
    pub permission_message: String,
    pub unsupported_message: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            debounce: Duration::from_millis(DEBOUNCE_MS),
            self_marker: MarkerStyle::self_marker(),
            antipode_marker: MarkerStyle::antipode_marker(),
            line: LineStyle::default(),
            permission_message: PERMISSION_MESSAGE.to_string(),
            unsupported_message: UNSUPPORTED_MESSAGE.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Apply string overrides looked up by key (`tile-url`, `attribution`,
    /// `zoom`, `center-lat`, `center-lng`, `debounce-ms`). Values that do not
    /// parse, and non-finite degrees, are logged and skipped.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("tile-url").filter(|s| !s.trim().is_empty()) {
            self.map.tile_url = url;
        }
        if let Some(attr) = lookup("attribution") {
            self.map.attribution = attr;
        }
        if let Some(zoom) = parse_override::<u8>(&lookup, "zoom") {
            self.map.zoom = zoom;
        }
        let lat = parse_degrees(&lookup, "center-lat").unwrap_or(self.map.center.latitude());
        let lng = parse_degrees(&lookup, "center-lng").unwrap_or(self.map.center.longitude());
        self.map.center = Coordinate::new(lat, lng);
        if let Some(ms) = parse_override::<u64>(&lookup, "debounce-ms") {
            self.debounce = Duration::from_millis(ms);
        }
        self
    }
}

fn parse_override<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring {}={:?}", key, raw);
            None
        }
    }
}

fn parse_degrees(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<f64> {
    let v = parse_override::<f64>(lookup, key)?;
    if !v.is_finite() {
        log::warn!("[config] ignoring non-finite {}={}", key, v);
        return None;
    }
    Some(v)
}

// DOM hooks the host page must provide.

// Map container; `data-*` attributes on it override `WidgetConfig`
pub const MAP_ELEMENT_ID: &str = "map";

// Manual location form
pub const LAT_INPUT_ID: &str = "lat";
pub const LNG_INPUT_ID: &str = "lng";

// Status widgets
pub const LOADING_ELEMENT_ID: &str = "loading";
pub const MESSAGE_ELEMENT_ID: &str = "message";

// Class toggled to hide status widgets
pub const HIDDEN_CLASS: &str = "hidden";

// Override keys read from the map container (`data-<key>`)
pub const CONFIG_ATTRIBUTE_KEYS: [&str; 6] = [
    "tile-url",
    "attribution",
    "zoom",
    "center-lat",
    "center-lng",
    "debounce-ms",
];

#[inline]
pub fn data_attribute(key: &str) -> String {
    format!("data-{}", key)
}

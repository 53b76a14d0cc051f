// Default tuning for the widget. Anything here can be overridden through
// `WidgetConfig`; the web front-end reads overrides from the map container.

// Initial viewport
pub const DEFAULT_CENTER: [f64; 2] = [40.745067, -73.972576]; // lat, lng
pub const DEFAULT_ZOOM: u8 = 11;

// Tiles
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

// Manual input quiet interval before a render
pub const DEBOUNCE_MS: u64 = 500;

// Marker icons
pub const SELF_ICON_URL: &str = "/assets/images/person_pin.svg";
pub const ANTIPODE_ICON_URL: &str = "/assets/images/pin.svg";
pub const ICON_SIZE: [u32; 2] = [25, 41];
pub const ICON_ANCHOR: [i32; 2] = [12, 41]; // tip of the pin
pub const POPUP_ANCHOR: [i32; 2] = [0, -35]; // relative to ICON_ANCHOR

pub const SELF_TITLE: &str = "You";
pub const ANTIPODE_TITLE: &str = "Antipode";
pub const SELF_POPUP: &str = "You are here";
pub const ANTIPODE_POPUP: &str = "Your antipode is here";

pub const LINE_COLOR: &str = "black";

// User-facing messages
pub const PERMISSION_MESSAGE: &str = "Please allow location permission or enter it manually";
pub const UNSUPPORTED_MESSAGE: &str =
    "Geolocation is not supported by this browser; enter a location manually";

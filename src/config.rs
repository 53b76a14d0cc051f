use crate::constants::{data_attribute, CONFIG_ATTRIBUTE_KEYS};
use antipode_core::WidgetConfig;
use web_sys as web;

/// Defaults overridden by `data-*` attributes on the map container, e.g.
/// `<div id="map" data-zoom="4" data-debounce-ms="300">`.
pub fn from_element(el: &web::Element) -> WidgetConfig {
    WidgetConfig::default().with_overrides(|key| {
        if !CONFIG_ATTRIBUTE_KEYS.iter().any(|k| *k == key) {
            return None;
        }
        el.get_attribute(&data_attribute(key))
    })
}

//! Minimal Leaflet bindings and the `MapSurface` implementation on top.
//!
//! Leaflet is loaded by the host page as the global `L`.

use antipode_core::{Bounds, Coordinate, LineStyle, MapConfig, MapSurface, MarkerStyle};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    pub type Map;

    /// Any `L.Layer`: markers, polylines, tile layers.
    pub type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn l_map(element_id: &str, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &Map, layer: &Layer) -> Map;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &Map, bounds: &JsValue) -> Map;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = polyline)]
    fn polyline(lat_lngs: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str) -> Layer;
}

// ---------------- JS value helpers ----------------
fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (key, value) in entries {
        _ = Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj.into()
}

#[inline]
fn lat_lng(c: Coordinate) -> JsValue {
    Array::of2(
        &JsValue::from_f64(c.latitude()),
        &JsValue::from_f64(c.longitude()),
    )
    .into()
}

#[inline]
fn point<T: Into<f64> + Copy>(xy: [T; 2]) -> JsValue {
    let (x, y): (f64, f64) = (xy[0].into(), xy[1].into());
    Array::of2(&JsValue::from_f64(x), &JsValue::from_f64(y)).into()
}

fn icon_for(style: &MarkerStyle) -> JsValue {
    icon(&options(&[
        ("iconUrl", JsValue::from_str(&style.icon_url)),
        ("iconSize", point(style.icon_size)),
        ("iconAnchor", point(style.icon_anchor)),
        ("popupAnchor", point(style.popup_anchor)),
    ]))
}

/// A Leaflet map owned by the widget. Not cloned or shared.
pub struct LeafletMap {
    map: Map,
}

impl LeafletMap {
    /// Create the map in `element_id` and attach the tile layer.
    pub fn mount(element_id: &str, config: &MapConfig) -> anyhow::Result<Self> {
        let map = l_map(
            element_id,
            &options(&[
                ("center", lat_lng(config.center)),
                ("zoom", JsValue::from(config.zoom)),
            ]),
        )
        .map_err(|e| anyhow::anyhow!("L.map failed: {:?}", e))?;
        tile_layer(
            &config.tile_url,
            &options(&[("attribution", JsValue::from_str(&config.attribution))]),
        )
        .add_to(&map);
        log::info!(
            "[init] map mounted on #{} zoom={} tiles={}",
            element_id,
            config.zoom,
            config.tile_url
        );
        Ok(Self { map })
    }
}

impl MapSurface for LeafletMap {
    type Layer = Layer;

    fn add_marker(&mut self, at: Coordinate, style: &MarkerStyle) -> Layer {
        marker(
            &lat_lng(at),
            &options(&[
                ("title", JsValue::from_str(&style.title)),
                ("icon", icon_for(style)),
            ]),
        )
        .add_to(&self.map)
        .bind_popup(&style.popup)
    }

    fn add_line(&mut self, points: [Coordinate; 2], style: &LineStyle) -> Layer {
        let lat_lngs = Array::of2(&lat_lng(points[0]), &lat_lng(points[1]));
        polyline(
            &lat_lngs,
            &options(&[("color", JsValue::from_str(&style.color))]),
        )
        .add_to(&self.map)
    }

    fn remove_layer(&mut self, layer: Layer) {
        self.map.remove_layer(&layer);
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        let [sw, ne] = bounds.corners();
        self.map.fit_bounds(&Array::of2(&lat_lng(sw), &lat_lng(ne)));
    }
}

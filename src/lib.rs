#![cfg(target_arch = "wasm32")]
use antipode_core::AntipodeWidget;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod config;
mod constants;
mod dom;
mod echo;
mod events;
mod geolocation;
mod leaflet;
mod overlay;

use constants::{LAT_INPUT_ID, LNG_INPUT_ID, MAP_ELEMENT_ID};
use leaflet::LeafletMap;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("antipode-map starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let map_el = document
        .get_element_by_id(MAP_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MAP_ELEMENT_ID))?;
    let config = config::from_element(&map_el);

    let lat = dom::input_by_id(&document, LAT_INPUT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing input #{}", LAT_INPUT_ID))?;
    let lng = dom::input_by_id(&document, LNG_INPUT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing input #{}", LNG_INPUT_ID))?;

    let map = LeafletMap::mount(MAP_ELEMENT_ID, &config.map)?;
    let widget = Rc::new(RefCell::new(AntipodeWidget::new(map, &config)));

    let wiring = events::FormWiring {
        document,
        widget,
        lat,
        lng,
        echo: echo::EchoGuard::default(),
    };
    // Manual entry works whatever the permission probe decides
    events::wire_manual_inputs(&wiring);
    events::paint(&wiring, false);

    spawn_local(events::probe_permission(wiring));
    Ok(())
}

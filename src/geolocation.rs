//! Browser permission query and one-shot device position request.

use antipode_core::{Coordinate, GeolocationError, PermissionStatus, ProbeError};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Query `navigator.permissions` for `geolocation`.
pub async fn query_permission() -> Result<PermissionStatus, ProbeError> {
    let unavailable = |e: JsValue| ProbeError::Unavailable(format!("{:?}", e));
    let window = web::window().ok_or_else(|| ProbeError::Unavailable("no window".into()))?;
    let permissions = window.navigator().permissions().map_err(unavailable)?;

    let descriptor = Object::new();
    Reflect::set(&descriptor, &"name".into(), &"geolocation".into()).map_err(unavailable)?;
    let promise = permissions.query(&descriptor).map_err(unavailable)?;
    let status = JsFuture::from(promise)
        .await
        .map_err(unavailable)?
        .dyn_into::<web::PermissionStatus>()
        .map_err(unavailable)?;

    Ok(match status.state() {
        web::PermissionState::Granted => PermissionStatus::Granted,
        web::PermissionState::Denied => PermissionStatus::Denied,
        web::PermissionState::Prompt => PermissionStatus::Prompt,
        _ => PermissionStatus::Unknown,
    })
}

/// Ask the device for its position once. Exactly one of `on_position` /
/// `on_error` runs, unless the device never answers.
pub fn request_position(
    on_position: impl FnOnce(Coordinate) + 'static,
    on_error: impl FnOnce(GeolocationError) + 'static,
) -> Result<(), GeolocationError> {
    let geolocation = web::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let success = Closure::once_into_js(move |pos: web::GeolocationPosition| {
        let coords = pos.coords();
        on_position(Coordinate::new(coords.latitude(), coords.longitude()));
    });
    let failure = Closure::once_into_js(move |err: web::GeolocationPositionError| {
        on_error(GeolocationError::from_code(err.code()));
    });

    geolocation
        .get_current_position_with_error_callback(
            success.unchecked_ref(),
            Some(failure.unchecked_ref()),
        )
        .map_err(|e| {
            log::warn!("[geo] getCurrentPosition threw: {:?}", e);
            GeolocationError::Unsupported
        })
}

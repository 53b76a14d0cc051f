use crate::dom;
use crate::echo::EchoGuard;
use crate::geolocation;
use crate::leaflet::LeafletMap;
use crate::overlay;
use antipode_core::{AntipodeWidget, FetchMode, ManualFields};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

pub type SharedWidget = Rc<RefCell<AntipodeWidget<LeafletMap>>>;

#[derive(Clone)]
pub struct FormWiring {
    pub document: web::Document,
    pub widget: SharedWidget,
    pub lat: web::HtmlInputElement,
    pub lng: web::HtmlInputElement,
    pub echo: EchoGuard,
}

/// Repaint loading/message from the widget, mirroring the fields too when
/// `sync_fields` is set.
pub fn paint(w: &FormWiring, sync_fields: bool) {
    let view = w.widget.borrow().view();
    overlay::set_loading(&w.document, view.loading);
    overlay::set_message(&w.document, view.message.as_deref());
    if sync_fields {
        write_fields(w, &view.fields);
    }
}

fn write_fields(w: &FormWiring, fields: &ManualFields) {
    w.echo.write(|| {
        w.lat.set_value(&fields.lat);
        w.lng.set_value(&fields.lng);
    });
}

pub fn wire_manual_inputs(w: &FormWiring) {
    for el in [&w.lat, &w.lng] {
        let w = w.clone();
        dom::add_input_listener(el, move || on_field_input(&w));
    }
}

fn on_field_input(w: &FormWiring) {
    let fields = ManualFields::new(w.lat.value(), w.lng.value());
    let now = Instant::now();
    let ticket = w
        .widget
        .borrow_mut()
        .on_fields_changed(fields, w.echo.origin(), now);
    let Some(ticket) = ticket else {
        return;
    };
    let w_timer = w.clone();
    let delay = if ticket.due > now {
        ticket.due - now
    } else {
        Duration::ZERO
    };
    let delay_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    let armed = dom::set_timeout(delay_ms, move || {
        let placed = w_timer.widget.borrow_mut().on_debounce_elapsed(ticket);
        if placed.is_some() {
            paint(&w_timer, false);
        }
    });
    if let Err(e) = armed {
        log::error!("[input] could not arm debounce timer: {:?}", e);
    }
}

/// Issue the device request decided by the permission probe.
pub fn start_location_fetch(w: &FormWiring, mode: FetchMode) {
    log::info!("[geo] requesting position ({:?})", mode);
    let w_ok = w.clone();
    let w_err = w.clone();
    let requested = geolocation::request_position(
        move |c| {
            w_ok.widget.borrow_mut().on_device_location(c);
            paint(&w_ok, true);
        },
        move |e| {
            w_err.widget.borrow_mut().on_geolocation_error(e);
            paint(&w_err, false);
        },
    );
    if let Err(e) = requested {
        w.widget.borrow_mut().on_geolocation_error(e);
    }
    paint(w, false);
}

/// Settle the one-shot permission probe, then fetch.
pub async fn probe_permission(w: FormWiring) {
    let result = geolocation::query_permission().await;
    let fetch = w.widget.borrow_mut().on_permission(result);
    if let Some(mode) = fetch {
        start_location_fetch(&w, mode);
    }
}

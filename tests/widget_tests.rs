// Host-side tests for the assembled widget: probe, sources, rendering.

mod common;

use antipode_core::{
    AntipodeWidget, Coordinate, FetchMode, GeolocationError, ManualFields, PermissionStatus,
    ProbeError, Ticket, UpdateOrigin, WidgetConfig,
};
use common::RecordingMap;
use instant::Instant;
use std::time::Duration;

fn widget() -> AntipodeWidget<RecordingMap> {
    AntipodeWidget::new(RecordingMap::default(), &WidgetConfig::default())
}

fn user_edit(
    w: &mut AntipodeWidget<RecordingMap>,
    lat: &str,
    lng: &str,
    now: Instant,
) -> Ticket {
    w.on_fields_changed(ManualFields::new(lat, lng), UpdateOrigin::User, now)
        .expect("user edits arm the debounce")
}

#[test]
fn starts_empty() {
    let w = widget();
    let view = w.view();
    assert!(!view.loading);
    assert_eq!(view.message, None);
    assert_eq!(view.location, None);
    assert_eq!(view.fields, ManualFields::default());
    assert_eq!(w.permission(), PermissionStatus::Unknown);
    assert!(!w.has_pending_input());
}

#[test]
fn granted_permission_fetches_silently() {
    let mut w = widget();
    assert_eq!(
        w.on_permission(Ok(PermissionStatus::Granted)),
        Some(FetchMode::Silent)
    );
    assert!(!w.view().loading);
    assert_eq!(w.view().message, None);
}

#[test]
fn denied_permission_shows_message_and_loads_until_device_answers() {
    let mut w = widget();
    assert_eq!(
        w.on_permission(Ok(PermissionStatus::Denied)),
        Some(FetchMode::Loud)
    );
    let view = w.view();
    assert!(view.loading);
    assert_eq!(
        view.message.as_deref(),
        Some(WidgetConfig::default().permission_message.as_str())
    );

    w.on_device_location(Coordinate::new(51.5, -0.12));
    assert!(!w.view().loading);
}

#[test]
fn failed_permission_query_still_fetches() {
    let mut w = widget();
    let fetch = w.on_permission(Err(ProbeError::Unavailable("rejected".into())));
    assert_eq!(fetch, Some(FetchMode::Loud));
    assert!(w.view().message.is_some());
}

#[test]
fn permission_triggers_one_fetch_per_lifetime() {
    let mut w = widget();
    assert!(w.on_permission(Ok(PermissionStatus::Prompt)).is_some());
    assert!(w.on_permission(Ok(PermissionStatus::Granted)).is_none());
    assert_eq!(w.permission(), PermissionStatus::Prompt);
}

#[test]
fn device_location_renders_and_syncs_fields() {
    let mut w = widget();
    w.on_permission(Ok(PermissionStatus::Granted));
    let placed = w.on_device_location(Coordinate::new(51.5, -0.12));

    assert_eq!(placed.location, Coordinate::new(51.5, -0.12));
    let view = w.view();
    assert_eq!(view.fields, ManualFields::new("51.5", "-0.12"));
    assert_eq!(view.location, Some(placed.location));
    assert_eq!(w.map().markers().len(), 2);
    assert_eq!(w.map().lines().len(), 1);
    // Mirroring the fields did not queue a manual render
    assert!(!w.has_pending_input());
    assert_eq!(w.map().adds(), 3);
}

#[test]
fn typing_burst_renders_once_with_last_value() {
    let mut w = widget();
    let t0 = Instant::now();
    let tickets = [
        user_edit(&mut w, "4", "-73.9", t0),
        user_edit(&mut w, "40", "-73.9", t0 + Duration::from_millis(100)),
        user_edit(&mut w, "40.7", "-73.9", t0 + Duration::from_millis(200)),
    ];
    let placements: Vec<_> = tickets
        .into_iter()
        .filter_map(|t| w.on_debounce_elapsed(t))
        .collect();

    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].location, Coordinate::new(40.7, -73.9));
    assert_eq!(w.map().adds(), 3);
}

#[test]
fn unsupported_geolocation_leaves_manual_input_working() {
    let mut w = widget();
    w.on_permission(Ok(PermissionStatus::Denied));
    w.on_geolocation_unavailable();
    let view = w.view();
    assert!(!view.loading);
    assert_eq!(
        view.message.as_deref(),
        Some(WidgetConfig::default().unsupported_message.as_str())
    );
    assert!(w.map().live.is_empty());

    let t = user_edit(&mut w, "-33.9", "151.2", Instant::now());
    let placed = w.on_debounce_elapsed(t).unwrap();
    assert_eq!(placed.location, Coordinate::new(-33.9, 151.2));
    assert_eq!(w.map().markers().len(), 2);
}

#[test]
fn device_error_stops_loading() {
    let mut w = widget();
    w.on_permission(Ok(PermissionStatus::Prompt));
    w.on_geolocation_error(GeolocationError::Timeout);
    let view = w.view();
    assert!(!view.loading);
    assert_eq!(
        view.message,
        Some(GeolocationError::Timeout.to_string())
    );
}

#[test]
fn manual_input_before_permission_settles_is_honoured() {
    let mut w = widget();
    let t = user_edit(&mut w, "10", "20", Instant::now());
    assert!(w.on_debounce_elapsed(t).is_some());
    assert_eq!(w.on_permission(Ok(PermissionStatus::Granted)), Some(FetchMode::Silent));
    assert_eq!(w.view().location, Some(Coordinate::new(10.0, 20.0)));
}

#[test]
fn field_echo_from_device_sync_does_not_render_again() {
    let mut w = widget();
    w.on_device_location(Coordinate::new(51.5, -0.12));
    let fields = w.view().fields;
    let ticket = w.on_fields_changed(fields, UpdateOrigin::Programmatic, Instant::now());
    assert!(ticket.is_none());
    assert!(!w.has_pending_input());
    assert_eq!(w.map().adds(), 3);
}

//! The antipode widget: permission probe, location coordinator and renderer
//! behind one event-driven surface.
//!
//! All methods run on the host's event loop. The host owns the asynchronous
//! parts (permission promise, device callback, debounce timers) and calls
//! back in here when each one resolves.

use crate::config::WidgetConfig;
use crate::coordinator::{LocationCoordinator, ManualFields, UpdateOrigin};
use crate::debounce::Ticket;
use crate::error::{GeolocationError, ProbeError};
use crate::geo::Coordinate;
use crate::permission::{FetchMode, PermissionProber, PermissionStatus};
use crate::renderer::{MapSurface, Placement, Renderer};
use instant::Instant;

/// What the page should currently show.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetView {
    pub loading: bool,
    pub message: Option<String>,
    pub location: Option<Coordinate>,
    pub fields: ManualFields,
}

pub struct AntipodeWidget<M: MapSurface> {
    prober: PermissionProber,
    coordinator: LocationCoordinator,
    renderer: Renderer<M>,
    permission_message: String,
}

impl<M: MapSurface> AntipodeWidget<M> {
    pub fn new(map: M, config: &WidgetConfig) -> Self {
        Self {
            prober: PermissionProber::new(),
            coordinator: LocationCoordinator::new(
                config.debounce,
                config.unsupported_message.clone(),
            ),
            renderer: Renderer::new(map, config),
            permission_message: config.permission_message.clone(),
        }
    }

    pub fn permission(&self) -> PermissionStatus {
        self.prober.status()
    }

    pub fn map(&self) -> &M {
        self.renderer.map()
    }

    pub fn has_pending_input(&self) -> bool {
        self.coordinator.has_pending_input()
    }

    pub fn view(&self) -> WidgetView {
        WidgetView {
            loading: self.coordinator.is_loading(),
            message: self.coordinator.message().map(str::to_string),
            location: self.coordinator.location(),
            fields: self.coordinator.fields().clone(),
        }
    }

    /// The permission query settled (or failed). Returns the fetch the host
    /// should issue, or `None` if the probe had already settled.
    pub fn on_permission(
        &mut self,
        result: Result<PermissionStatus, ProbeError>,
    ) -> Option<FetchMode> {
        let outcome = self.prober.settle(result)?;
        if outcome.show_message {
            self.coordinator.set_message(self.permission_message.clone());
        }
        self.coordinator.begin_fetch(outcome.fetch);
        Some(outcome.fetch)
    }

    /// Either manual field changed. For user edits the host arms a timer for
    /// `Ticket::due` and passes the ticket to `on_debounce_elapsed`.
    pub fn on_fields_changed(
        &mut self,
        fields: ManualFields,
        origin: UpdateOrigin,
        now: Instant,
    ) -> Option<Ticket> {
        self.coordinator.set_fields(fields, origin, now)
    }

    pub fn on_debounce_elapsed(&mut self, ticket: Ticket) -> Option<Placement> {
        let c = self.coordinator.on_debounce_elapsed(ticket)?;
        Some(self.renderer.render(c))
    }

    /// The device reported a position. The caller mirrors `view().fields`
    /// into its inputs without dispatching change events.
    pub fn on_device_location(&mut self, c: Coordinate) -> Placement {
        let c = self.coordinator.on_device_location(c);
        self.renderer.render(c)
    }

    pub fn on_geolocation_unavailable(&mut self) {
        self.coordinator.on_geolocation_unavailable();
    }

    pub fn on_geolocation_error(&mut self, err: GeolocationError) {
        self.coordinator.on_geolocation_error(err);
    }
}

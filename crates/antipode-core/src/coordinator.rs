//! Reconciles the device position and the two manual fields into a single
//! current location.
//!
//! The coordinator is the only writer of the location, the loading flag and
//! the user-facing message. Whichever source reports last wins outright:
//! a device position drops any pending manual edit, and a later manual edit
//! replaces the device position once its quiet interval elapses. Lat and lng
//! always travel together; a pair is never assembled from two sources.

use crate::debounce::{Debouncer, Ticket};
use crate::error::{GeolocationError, InputError};
use crate::geo::Coordinate;
use crate::permission::FetchMode;
use instant::Instant;
use std::time::Duration;

/// Who changed the manual fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOrigin {
    /// A keystroke or change event. Debounced, then rendered.
    User,
    /// The widget itself mirroring a device position. Never echoes back as an
    /// edit.
    Programmatic,
}

/// Raw contents of the latitude and longitude inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualFields {
    pub lat: String,
    pub lng: String,
}

impl ManualFields {
    pub fn new(lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    pub fn from_coordinate(c: Coordinate) -> Self {
        Self::new(c.latitude().to_string(), c.longitude().to_string())
    }

    /// Both fields as a coordinate. Range is not checked.
    pub fn parse(&self) -> Result<Coordinate, InputError> {
        Ok(Coordinate::new(parse_field(&self.lat)?, parse_field(&self.lng)?))
    }
}

/// Decimal parse of one field. Blank is `Empty`; anything that is not a
/// finite number (including `NaN` and `inf`) is `NotANumber`.
pub fn parse_field(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber(trimmed.to_string())),
    }
}

#[derive(Debug)]
pub struct LocationCoordinator {
    location: Option<Coordinate>,
    loading: bool,
    message: Option<String>,
    fields: ManualFields,
    debouncer: Debouncer<ManualFields>,
    unsupported_message: String,
}

impl LocationCoordinator {
    pub fn new(debounce: Duration, unsupported_message: impl Into<String>) -> Self {
        Self {
            location: None,
            loading: false,
            message: None,
            fields: ManualFields::default(),
            debouncer: Debouncer::new(debounce),
            unsupported_message: unsupported_message.into(),
        }
    }

    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn fields(&self) -> &ManualFields {
        &self.fields
    }

    pub fn has_pending_input(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// A device request went out.
    pub fn begin_fetch(&mut self, mode: FetchMode) {
        self.loading = mode.shows_loading();
        log::info!("[geo] fetch started mode={:?}", mode);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// An `input` event on the manual fields. User edits restart the debounce
    /// and return the ticket the host must fire at `Ticket::due`;
    /// events raised while the widget writes the fields itself only update
    /// the mirror.
    pub fn set_fields(
        &mut self,
        fields: ManualFields,
        origin: UpdateOrigin,
        now: Instant,
    ) -> Option<Ticket> {
        match origin {
            UpdateOrigin::User => Some(self.on_manual_input(&fields.lat, &fields.lng, now)),
            UpdateOrigin::Programmatic => {
                self.fields = fields;
                None
            }
        }
    }

    pub fn on_manual_input(&mut self, raw_lat: &str, raw_lng: &str, now: Instant) -> Ticket {
        self.fields = ManualFields::new(raw_lat, raw_lng);
        self.debouncer.push(self.fields.clone(), now)
    }

    /// Timer callback. Returns the coordinate to render when `ticket` is
    /// still the latest edit and both fields parse.
    pub fn on_debounce_elapsed(&mut self, ticket: Ticket) -> Option<Coordinate> {
        let fields = self.debouncer.fire(ticket)?;
        self.accept_manual(fields)
    }

    fn accept_manual(&mut self, fields: ManualFields) -> Option<Coordinate> {
        match fields.parse() {
            Ok(c) => {
                log::info!("[input] manual location {:?}", c);
                self.location = Some(c);
                Some(c)
            }
            Err(e) => {
                log::debug!("[input] ignored: {}", e);
                None
            }
        }
    }

    /// Device position arrived. Mirrors it into the fields without raising an
    /// edit, drops any pending manual edit and clears the loading flag.
    pub fn on_device_location(&mut self, c: Coordinate) -> Coordinate {
        self.debouncer.supersede();
        self.fields = ManualFields::from_coordinate(c);
        self.location = Some(c);
        self.loading = false;
        log::info!("[geo] device location {:?}", c);
        c
    }

    pub fn on_geolocation_unavailable(&mut self) {
        log::warn!("[geo] {}", GeolocationError::Unsupported);
        self.loading = false;
        self.message = Some(self.unsupported_message.clone());
    }

    /// The device request failed after it was issued.
    pub fn on_geolocation_error(&mut self, err: GeolocationError) {
        if err == GeolocationError::Unsupported {
            return self.on_geolocation_unavailable();
        }
        log::warn!("[geo] request failed: {:?}", err);
        self.loading = false;
        self.message = Some(err.to_string());
    }
}

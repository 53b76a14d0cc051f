use thiserror::Error;

/// Why a manual field could not be turned into a number.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    #[error("field is empty")]
    Empty,
    #[error("{0:?} is not a number")]
    NotANumber(String),
}

/// Failure reported by the device location path.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("geolocation API not available")]
    Unsupported,
    #[error("Location access was denied; enter a location manually")]
    PermissionDenied,
    #[error("Your location is currently unavailable; enter it manually")]
    PositionUnavailable,
    #[error("Locating you took too long; enter a location manually")]
    Timeout,
}

impl GeolocationError {
    /// Map a `GeolocationPositionError.code` (1, 2, 3) to an error.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::PositionUnavailable,
        }
    }
}

/// The permission query could not produce a status.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ProbeError {
    #[error("permission query unavailable: {0}")]
    Unavailable(String),
}

//! Geographic value types.
//!
//! Longitudes are signed degrees in \[-180, 180\] (negative west of
//! Greenwich). Nothing here clamps or wraps; out-of-range input flows through
//! unchanged and yields out-of-range output.

use glam::DVec2;

/// A latitude/longitude pair in degrees. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// True when latitude is in \[-90, 90\] and longitude in \[-180, 180\].
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// The diametrically opposite point. See [`antipode`].
    #[inline]
    pub fn antipode(&self) -> Coordinate {
        antipode(*self)
    }

    #[inline]
    fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.latitude, self.longitude)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.latitude, c.longitude]
    }
}

/// Point on the opposite side of the globe.
///
/// Latitude is mirrored; longitude shifts by half a turn toward the other
/// hemisphere. Assumes the signed \[-180, 180\] convention: an unsigned
/// \[0, 360) longitude produces a wrong result.
pub fn antipode(c: Coordinate) -> Coordinate {
    let lat = -c.latitude;
    let lng = if c.longitude < 0.0 {
        c.longitude + 180.0
    } else {
        c.longitude - 180.0
    };
    Coordinate::new(lat, lng)
}

/// Axis-aligned lat/lng box, as used for viewport fitting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    /// Smallest box containing both points.
    pub fn around(a: Coordinate, b: Coordinate) -> Self {
        let (a, b) = (a.as_dvec2(), b.as_dvec2());
        let min = a.min(b);
        let max = a.max(b);
        Self {
            south_west: Coordinate::new(min.x, min.y),
            north_east: Coordinate::new(max.x, max.y),
        }
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        (self.south_west.latitude..=self.north_east.latitude).contains(&c.latitude)
            && (self.south_west.longitude..=self.north_east.longitude).contains(&c.longitude)
    }

    pub fn corners(&self) -> [Coordinate; 2] {
        [self.south_west, self.north_east]
    }
}

use std::fmt;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::ResolutionError;

const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A validated latitude/longitude pair in degrees, east and north positive.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ResolutionError> {
        // NaN fails both range checks.
        if LATITUDE_RANGE.contains(&latitude) && LONGITUDE_RANGE.contains(&longitude) {
            Ok(GeoCoordinate { latitude, longitude })
        } else {
            Err(ResolutionError::InvalidCoordinate { latitude, longitude })
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = ResolutionError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        GeoCoordinate::new(raw.latitude, raw.longitude)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Parses an IANA time zone id such as `Asia/Tokyo`.
pub fn parse_time_zone(id: &str) -> Result<Tz, ResolutionError> {
    id.parse::<Tz>()
        .map_err(|_| ResolutionError::InvalidTimeZone(id.to_owned()))
}

/// A named place the countdown can be shown for.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub coordinate: GeoCoordinate,
    pub time_zone: Tz,
}

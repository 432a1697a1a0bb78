use chrono::NaiveDate;
use thiserror::Error;

/// Failure modes of a sunset resolution.
#[derive(Debug, Error, PartialEq)]
pub enum ResolutionError {
    #[error("invalid coordinate (latitude={latitude}, longitude={longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("unrecognized time zone id: {0}")]
    InvalidTimeZone(String),

    #[error("no sunrise/sunset available for {date}")]
    ProviderUnavailable {
        date: NaiveDate,
        #[source]
        source: ProviderError,
    },
}

/// Failure reported by an astronomical time provider for a single date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The sun does not rise or set on that date (polar day/night).
    #[error("the sun does not rise or set on {date}")]
    NoSunEvent { date: NaiveDate },

    #[error("timestamp {0} cannot be represented as an instant")]
    InvalidTimestamp(i64),

    #[error("sunrise is not before sunset")]
    InvertedDay,

    #[error("no calendar day follows {0}")]
    DateOutOfRange(NaiveDate),

    /// No solar day of the provider maps onto the location-local date.
    #[error("no solar day falls on local date {date}")]
    OffCalendarDay { date: NaiveDate },

    /// The fallback sunset still lies before `now`.
    #[error("next sunset precedes the requested instant")]
    Stale,
}

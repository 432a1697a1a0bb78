//! Resolution of the next sunset for a location.
//!
//! Everything is computed from an explicit `now`. The location-local calendar
//! date is derived from `now` in the location's own time zone, never from the
//! caller's, and that date is what the astronomical provider is asked about.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use log::{debug, warn};

use crate::error::{ProviderError, ResolutionError};
use crate::location::{parse_time_zone, GeoCoordinate};
use crate::sunset::{AstronomicalTimeProvider, SunTimes, SunriseProvider};
use crate::time::{local_date, next_local_date};

/// Result of a resolution.
///
/// `today_sunrise` and `today_sunset` always belong to `local_date`, the
/// location's current day. `next_sunset` is the countdown target and may
/// belong to the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunsetResolution {
    pub next_sunset: DateTime<Utc>,
    pub today_sunrise: DateTime<Utc>,
    pub today_sunset: DateTime<Utc>,
    pub local_date: NaiveDate,
}

impl SunsetResolution {
    /// Night means "not strictly between today's sunrise and sunset".
    pub fn is_night(&self, now: DateTime<Utc>) -> bool {
        !(now > self.today_sunrise && now < self.today_sunset)
    }

    pub fn time_until_sunset(&self, now: DateTime<Utc>) -> Duration {
        self.next_sunset - now
    }

    /// Whether the countdown targets tomorrow's sunset.
    pub fn rolled_over(&self) -> bool {
        self.next_sunset != self.today_sunset
    }
}

#[derive(Debug, Clone, Default)]
pub struct SunsetResolver<P = SunriseProvider> {
    provider: P,
}

impl<P: AstronomicalTimeProvider> SunsetResolver<P> {
    pub fn new(provider: P) -> Self {
        SunsetResolver { provider }
    }

    pub fn resolve(&self, now: DateTime<Utc>, coordinate: GeoCoordinate, time_zone: &str) -> Result<SunsetResolution, ResolutionError> {
        let tz = parse_time_zone(time_zone)?;
        self.resolve_in(now, coordinate, tz)
    }

    pub fn resolve_in(&self, now: DateTime<Utc>, coordinate: GeoCoordinate, tz: Tz) -> Result<SunsetResolution, ResolutionError> {
        let today = local_date(now, &tz);
        debug!("Resolving sunset at {coordinate} in {tz}: now={now}, local date={today}");

        let SunTimes { sunrise: today_sunrise, sunset: today_sunset } = self.query(today, coordinate, tz)?;

        let next_sunset = if now < today_sunset {
            today_sunset
        } else {
            let tomorrow = next_local_date(today).ok_or_else(|| ResolutionError::ProviderUnavailable {
                date: today,
                source: ProviderError::DateOutOfRange(today),
            })?;
            debug!("Sunset of {today} ({today_sunset}) has passed, using {tomorrow}");
            let sunset = self.query(tomorrow, coordinate, tz)?.sunset;
            if sunset < now {
                warn!("Sunset of {tomorrow} ({sunset}) still precedes {now} in {tz}");
                return Err(ResolutionError::ProviderUnavailable {
                    date: tomorrow,
                    source: ProviderError::Stale,
                });
            }
            sunset
        };

        Ok(SunsetResolution {
            next_sunset,
            today_sunrise,
            today_sunset,
            local_date: today,
        })
    }

    fn query(&self, date: NaiveDate, coordinate: GeoCoordinate, tz: Tz) -> Result<SunTimes, ResolutionError> {
        self.provider
            .compute_times(date, coordinate, tz)
            .map_err(|source| {
                warn!("No sun times for {date} at {coordinate} ({tz}): {source}");
                ResolutionError::ProviderUnavailable { date, source }
            })
    }
}

/// Resolves with the default provider from raw, unvalidated inputs.
pub fn resolve(now: DateTime<Utc>, latitude: f64, longitude: f64, time_zone: &str) -> Result<SunsetResolution, ResolutionError> {
    let coordinate = GeoCoordinate::new(latitude, longitude)?;
    SunsetResolver::new(SunriseProvider).resolve(now, coordinate, time_zone)
}

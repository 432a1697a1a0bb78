use std::cmp::Ordering;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use sunrise::sunrise_sunset;

use crate::error::ProviderError;
use crate::location::GeoCoordinate;

/// Sunrise and sunset of one location-local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// Computes sunrise and sunset for a calendar date as observed at a location.
///
/// `date` is the date on the location's own calendar, and `tz` is the
/// location's zone. Implementations must not consult the system clock.
pub trait AstronomicalTimeProvider {
    fn compute_times(&self, date: NaiveDate, coordinate: GeoCoordinate, tz: Tz) -> Result<SunTimes, ProviderError>;
}

impl<F> AstronomicalTimeProvider for F
where
    F: Fn(NaiveDate, GeoCoordinate, Tz) -> Result<SunTimes, ProviderError>,
{
    fn compute_times(&self, date: NaiveDate, coordinate: GeoCoordinate, tz: Tz) -> Result<SunTimes, ProviderError> {
        self(date, coordinate, tz)
    }
}

/// Adapter over the `sunrise` crate.
///
/// `sunrise_sunset` takes a calendar date and returns two unix timestamps.
/// It reports a missing event (polar day or night) as epoch `0`. Its answer is
/// centred on mean solar noon at the longitude, which for zones far from solar
/// time (Pacific/Apia, Pacific/Kiritimati) lands on a neighbouring local day.
/// The adapter shifts the queried day until solar noon falls on `date` in `tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunriseProvider;

/// Solar days tried before giving up: the requested one and one on each side.
const MAX_SOLAR_DAY_SHIFTS: usize = 3;

impl AstronomicalTimeProvider for SunriseProvider {
    fn compute_times(&self, date: NaiveDate, coordinate: GeoCoordinate, tz: Tz) -> Result<SunTimes, ProviderError> {
        let mut solar_date = date;
        for _ in 0..MAX_SOLAR_DAY_SHIFTS {
            let times = solar_day(solar_date, coordinate, date)?;
            let noon = times.sunrise + (times.sunset - times.sunrise) / 2;
            solar_date = match noon.with_timezone(&tz).date_naive().cmp(&date) {
                Ordering::Equal => return Ok(times),
                Ordering::Greater => solar_date.pred_opt(),
                Ordering::Less => solar_date.succ_opt(),
            }
            .ok_or(ProviderError::OffCalendarDay { date })?;
        }
        Err(ProviderError::OffCalendarDay { date })
    }
}

/// Raw library answer for `solar_date`; failures are reported against the
/// location-local `date` they were needed for.
fn solar_day(solar_date: NaiveDate, coordinate: GeoCoordinate, date: NaiveDate) -> Result<SunTimes, ProviderError> {
    let (sunrise_epoch, sunset_epoch) =
        sunrise_sunset(coordinate.latitude(), coordinate.longitude(), solar_date.year(), solar_date.month(), solar_date.day());
    if sunrise_epoch == 0 || sunset_epoch == 0 {
        return Err(ProviderError::NoSunEvent { date });
    }

    let sunrise = epoch_to_instant(sunrise_epoch)?;
    let sunset = epoch_to_instant(sunset_epoch)?;
    if sunrise >= sunset {
        return Err(ProviderError::InvertedDay);
    }
    Ok(SunTimes { sunrise, sunset })
}

fn epoch_to_instant(epoch: i64) -> Result<DateTime<Utc>, ProviderError> {
    match Utc.timestamp_opt(epoch, 0).earliest() {
        Some(instant) => Ok(instant),
        None => Err(ProviderError::InvalidTimestamp(epoch)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn local_clock(instant: DateTime<Utc>, tz: Tz) -> NaiveTime {
        instant.with_timezone(&tz).time()
    }

    fn between(t: NaiveTime, from: (u32, u32), to: (u32, u32)) -> bool {
        let from = NaiveTime::from_hms_opt(from.0, from.1, 0).unwrap();
        let to = NaiveTime::from_hms_opt(to.0, to.1, 0).unwrap();
        from <= t && t <= to
    }

    #[test]
    fn tokyo_midwinter() {
        let tokyo = GeoCoordinate::new(35.6762, 139.6503).unwrap();
        let times = SunriseProvider
            .compute_times(date(2026, 1, 19), tokyo, Tz::Asia__Tokyo)
            .unwrap();

        let sunrise = times.sunrise.with_timezone(&Tz::Asia__Tokyo);
        let sunset = times.sunset.with_timezone(&Tz::Asia__Tokyo);
        assert_eq!(sunrise.date_naive(), date(2026, 1, 19));
        assert_eq!(sunset.date_naive(), date(2026, 1, 19));
        assert!(between(sunrise.time(), (6, 35), (7, 5)), "sunrise {sunrise}");
        assert!(between(sunset.time(), (16, 35), (17, 5)), "sunset {sunset}");
    }

    #[test]
    fn jerusalem_midsummer() {
        let jerusalem = GeoCoordinate::new(31.7683, 35.2137).unwrap();
        let times = SunriseProvider
            .compute_times(date(2026, 6, 21), jerusalem, Tz::Asia__Jerusalem)
            .unwrap();
        let sunset = local_clock(times.sunset, Tz::Asia__Jerusalem);
        assert_eq!(sunset.hour(), 19, "sunset {sunset}");
    }

    #[test]
    fn apia_gets_its_own_day() {
        // UTC+13 at longitude -171.77: solar noon of calendar day D is local D+1.
        let apia = GeoCoordinate::new(-13.8333, -171.7667).unwrap();
        let times = SunriseProvider
            .compute_times(date(2026, 1, 19), apia, Tz::Pacific__Apia)
            .unwrap();

        let sunrise = times.sunrise.with_timezone(&Tz::Pacific__Apia);
        let sunset = times.sunset.with_timezone(&Tz::Pacific__Apia);
        assert_eq!(sunrise.date_naive(), date(2026, 1, 19), "sunrise {sunrise}");
        assert_eq!(sunset.date_naive(), date(2026, 1, 19), "sunset {sunset}");
        assert!(between(sunset.time(), (18, 40), (19, 20)), "sunset {sunset}");
    }

    #[test]
    fn kiritimati_gets_its_own_day() {
        // UTC+14 at longitude -157.43.
        let kiritimati = GeoCoordinate::new(1.87, -157.43).unwrap();
        for day in [1, 2, 3] {
            let times = SunriseProvider
                .compute_times(date(2026, 3, day), kiritimati, Tz::Pacific__Kiritimati)
                .unwrap();
            assert_eq!(times.sunrise.with_timezone(&Tz::Pacific__Kiritimati).date_naive(), date(2026, 3, day));
            assert_eq!(times.sunset.with_timezone(&Tz::Pacific__Kiritimati).date_naive(), date(2026, 3, day));
        }
    }

    #[test]
    fn consecutive_days_are_a_day_apart() {
        let apia = GeoCoordinate::new(-13.8333, -171.7667).unwrap();
        let first = SunriseProvider.compute_times(date(2026, 1, 19), apia, Tz::Pacific__Apia).unwrap();
        let second = SunriseProvider.compute_times(date(2026, 1, 20), apia, Tz::Pacific__Apia).unwrap();
        let gap = second.sunset - first.sunset;
        assert!((gap - chrono::Duration::days(1)).num_minutes().abs() <= 3, "gap {gap}");
    }

    #[test]
    fn sunset_after_local_midnight_stays_with_its_day() {
        // Reykjavik near the solstice: the sun sets just after midnight.
        let reykjavik = GeoCoordinate::new(64.1466, -21.9426).unwrap();
        let times = SunriseProvider
            .compute_times(date(2026, 6, 21), reykjavik, Tz::Atlantic__Reykjavik)
            .unwrap();
        assert_eq!(times.sunrise.with_timezone(&Tz::Atlantic__Reykjavik).date_naive(), date(2026, 6, 21));
        assert!(times.sunset - times.sunrise > chrono::Duration::hours(20));
    }

    #[test]
    fn polar_night_is_no_event() {
        let tromso = GeoCoordinate::new(69.6492, 18.9553).unwrap();
        let result = SunriseProvider.compute_times(date(2026, 12, 21), tromso, Tz::Europe__Oslo);
        assert_eq!(result, Err(ProviderError::NoSunEvent { date: date(2026, 12, 21) }));
    }

    #[test]
    fn midnight_sun_is_no_event() {
        let tromso = GeoCoordinate::new(69.6492, 18.9553).unwrap();
        let result = SunriseProvider.compute_times(date(2026, 6, 21), tromso, Tz::Europe__Oslo);
        assert!(matches!(result, Err(ProviderError::NoSunEvent { .. })));
    }

    #[test]
    fn closures_are_providers() {
        let fixed = |d: NaiveDate, _: GeoCoordinate, _: Tz| -> Result<SunTimes, ProviderError> {
            Err(ProviderError::NoSunEvent { date: d })
        };
        let coordinate = GeoCoordinate::new(0.0, 0.0).unwrap();
        assert!(fixed.compute_times(date(2026, 1, 1), coordinate, Tz::UTC).is_err());
    }
}

use anyhow::Context;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// The calendar date observed at `tz` at the absolute instant `now`.
pub fn local_date<T: TimeZone>(now: DateTime<Utc>, tz: &T) -> NaiveDate {
	now.with_timezone(tz).date_naive()
}

/// The day after `date` on the location's own calendar.
pub fn next_local_date(date: NaiveDate) -> Option<NaiveDate> {
	date.succ_opt()
}

/// Parses an RFC 3339 timestamp (any offset) into an absolute instant.
pub fn parse_instant(text: &str) -> anyhow::Result<DateTime<Utc>> {
	let parsed = DateTime::parse_from_rfc3339(text)
		.context(format!("Unable to parse instant: {text}"))?;
	Ok(parsed.with_timezone(&Utc))
}

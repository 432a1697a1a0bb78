//! Countdown state derived from a resolution and the current instant.

use std::f64::consts::PI;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::resolver::SunsetResolution;

const SUNRISE_PHASE_END: f64 = 0.1;
const GOLDEN_HOUR_START: f64 = 0.85;
const MAX_PROGRESS: f64 = 1.1;
const ARC_PEAK: f64 = 70.0;

/// Minutes-left limits for the urgent countdown states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CountdownThresholds {
    pub critical_minutes: u32,
    pub imminent_minutes: u32,
}

impl Default for CountdownThresholds {
    fn default() -> Self {
        CountdownThresholds {
            critical_minutes: 15,
            imminent_minutes: 5,
        }
    }
}

impl CountdownThresholds {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.imminent_minutes > self.critical_minutes {
            return Err(anyhow::anyhow!(
                "imminent_minutes ({}) must not exceed critical_minutes ({})",
                self.imminent_minutes,
                self.critical_minutes
            ));
        }
        Ok(())
    }
}

/// Where the sun is in today's daylight window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Sunrise,
    Day,
    GoldenHour,
    Passed,
}

impl Phase {
    fn from_progress(progress: f64) -> Self {
        if progress < SUNRISE_PHASE_END {
            Phase::Sunrise
        } else if progress > 1.0 {
            Phase::Passed
        } else if progress > GOLDEN_HOUR_START {
            Phase::GoldenHour
        } else {
            Phase::Day
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Phase::Sunrise | Phase::Day => "Time until Shkia",
            Phase::GoldenHour => "Approaching Sunset",
            Phase::Passed => "Shkia Passed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Calm,
    Critical,
    Imminent,
}

impl Urgency {
    fn from_remaining(remaining: Duration, thresholds: &CountdownThresholds) -> Self {
        let minutes_left = remaining.num_milliseconds() as f64 / 60_000.0;
        if minutes_left <= 0.0 {
            Urgency::Calm
        } else if minutes_left <= f64::from(thresholds.imminent_minutes) {
            Urgency::Imminent
        } else if minutes_left <= f64::from(thresholds.critical_minutes) {
            Urgency::Critical
        } else {
            Urgency::Calm
        }
    }
}

/// Sun placement on the daylight arc, in percent of the sky box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunPosition {
    pub x: f64,
    pub bottom: f64,
}

impl SunPosition {
    fn from_progress(progress: f64) -> Self {
        let height = (progress * PI).sin() * ARC_PEAK;
        let bottom = if progress > 1.0 {
            -20.0
        } else {
            (height - 10.0).max(-10.0)
        };
        SunPosition {
            x: progress * 100.0,
            bottom: bottom.min(100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountdownState {
    pub remaining_seconds: i64,
    pub formatted: String,
    pub day_progress: f64,
    pub sun: SunPosition,
    pub phase: Phase,
    pub urgency: Urgency,
    pub status: &'static str,
}

impl CountdownState {
    pub fn at(resolution: &SunsetResolution, now: DateTime<Utc>, thresholds: &CountdownThresholds) -> Self {
        let remaining = resolution.time_until_sunset(now).max(Duration::zero());
        let progress = day_progress(resolution, now);
        let phase = Phase::from_progress(progress);
        let urgency = Urgency::from_remaining(remaining, thresholds);
        let status = match urgency {
            Urgency::Imminent => "SHKIA IMMINENT",
            Urgency::Critical => "Critical Time",
            Urgency::Calm => phase.status(),
        };

        CountdownState {
            remaining_seconds: remaining.num_seconds(),
            formatted: format_remaining(remaining),
            day_progress: progress,
            sun: SunPosition::from_progress(progress),
            phase,
            urgency,
            status,
        }
    }
}

/// Fraction of today's daylight elapsed at `now`, clamped to `[0, 1.1]`.
pub fn day_progress(resolution: &SunsetResolution, now: DateTime<Utc>) -> f64 {
    let day_length = (resolution.today_sunset - resolution.today_sunrise).num_milliseconds();
    if day_length <= 0 {
        return 0.0;
    }
    let elapsed = (now - resolution.today_sunrise).num_milliseconds();
    (elapsed as f64 / day_length as f64).clamp(0.0, MAX_PROGRESS)
}

/// `HH:MM:SS`, floored to whole seconds. Negative durations show as zero.
pub fn format_remaining(remaining: Duration) -> String {
    let total_seconds = remaining.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

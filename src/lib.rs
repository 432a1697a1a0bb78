//! Countdown to sunset (shkia) for an arbitrary location.
//!
//! The core is [`SunsetResolver`]: given an explicit `now`, a coordinate and
//! the location's IANA time zone, it finds today's sunrise and sunset on the
//! location's own calendar and the next sunset to count down to.
//!
//! ```no_run
//! use chrono::Utc;
//!
//! let resolution = shkia_clock::resolve(Utc::now(), 35.6762, 139.6503, "Asia/Tokyo")?;
//! println!("next shkia: {}", resolution.next_sunset);
//! # Ok::<(), shkia_clock::ResolutionError>(())
//! ```

pub mod config;
pub mod countdown;
pub mod error;
pub mod location;
pub mod messages;
pub mod resolver;
pub mod sunset;
pub mod time;

pub use error::{ProviderError, ResolutionError};
pub use location::{GeoCoordinate, Location};
pub use resolver::{resolve, SunsetResolution, SunsetResolver};
pub use sunset::{AstronomicalTimeProvider, SunTimes, SunriseProvider};

use std::{env, fs::File, io::{BufReader, Read}, path::Path};

use anyhow::Context;
use serde::Deserialize;

use crate::countdown::CountdownThresholds;
use crate::location::{parse_time_zone, GeoCoordinate, Location};

pub const CONFIG_PATH_VAR: &str = "SHKIA_CONFIG_PATH";

#[derive(Debug, Deserialize)]
struct LocationConfig {
	name: Option<String>,
	#[serde(flatten)]
	coordinate: GeoCoordinate,
	timezone: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
	location: Option<LocationConfig>,
	#[serde(default)]
	countdown: CountdownThresholds,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShkiaConfig {
	pub location: Option<Location>,
	pub countdown: CountdownThresholds,
}

impl ShkiaConfig {
	pub fn new() -> anyhow::Result<Self> {
		Self::from_env(CONFIG_PATH_VAR)
	}

	pub fn from_env(env_path_var: &str) -> anyhow::Result<Self> {
		let config_path = env::var(env_path_var)
			.context(format!("Unable to load env var: {env_path_var}"))?;
		Self::from_path(&config_path)
	}

	pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
		let path = path.as_ref();
		let config_file = File::open(path)
			.context(format!("Unable to open file at {}", path.display()))?;
		Self::from_reader(BufReader::new(config_file))
	}

	pub fn from_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
		let raw: RawConfig = serde_yaml::from_reader(reader)
			.context("Unable to parse shkia config yaml.")?;
		raw.countdown.validate()?;

		let location = match raw.location {
			Some(location) => {
				let time_zone = parse_time_zone(&location.timezone)
					.context("Invalid location timezone in config.")?;
				Some(Location {
					name: location.name.unwrap_or_else(|| location.timezone.clone()),
					coordinate: location.coordinate,
					time_zone,
				})
			},
			None => None,
		};

		Ok(ShkiaConfig {
			location,
			countdown: raw.countdown,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono_tz::Tz;
	use pretty_assertions::assert_eq;

	#[test]
	fn full_config() {
		let yaml = "
location:
  name: Tokyo
  latitude: 35.6762
  longitude: 139.6503
  timezone: Asia/Tokyo
countdown:
  critical_minutes: 20
  imminent_minutes: 3
";
		let config = ShkiaConfig::from_reader(yaml.as_bytes()).unwrap();
		let location = config.location.unwrap();
		assert_eq!(location.name, "Tokyo");
		assert_eq!(location.time_zone, Tz::Asia__Tokyo);
		assert_eq!(location.coordinate, GeoCoordinate::new(35.6762, 139.6503).unwrap());
		assert_eq!(config.countdown, CountdownThresholds { critical_minutes: 20, imminent_minutes: 3 });
	}

	#[test]
	fn defaults_when_sections_missing() {
		let config = ShkiaConfig::from_reader("{}".as_bytes()).unwrap();
		assert_eq!(config, ShkiaConfig::default());
	}

	#[test]
	fn partial_countdown_keeps_other_default() {
		let config = ShkiaConfig::from_reader("countdown:\n  critical_minutes: 30\n".as_bytes()).unwrap();
		assert_eq!(config.countdown, CountdownThresholds { critical_minutes: 30, imminent_minutes: 5 });
	}

	#[test]
	fn name_defaults_to_timezone() {
		let yaml = "location: { latitude: 31.7683, longitude: 35.2137, timezone: Asia/Jerusalem }";
		let config = ShkiaConfig::from_reader(yaml.as_bytes()).unwrap();
		assert_eq!(config.location.unwrap().name, "Asia/Jerusalem");
	}

	#[test]
	fn rejects_bad_timezone() {
		let yaml = "location: { latitude: 0.0, longitude: 0.0, timezone: Not/AZone }";
		let err = ShkiaConfig::from_reader(yaml.as_bytes()).unwrap_err();
		assert!(format!("{err:#}").contains("Not/AZone"));
	}

	#[test]
	fn rejects_bad_coordinate() {
		let yaml = "location: { latitude: 100.0, longitude: 0.0, timezone: UTC }";
		assert!(ShkiaConfig::from_reader(yaml.as_bytes()).is_err());
	}

	#[test]
	fn rejects_inverted_thresholds() {
		let yaml = "countdown: { critical_minutes: 2, imminent_minutes: 5 }";
		assert!(ShkiaConfig::from_reader(yaml.as_bytes()).is_err());
	}

	#[test]
	fn missing_env_var() {
		let err = ShkiaConfig::from_env("SHKIA_CONFIG_PATH_THAT_IS_NEVER_SET").unwrap_err();
		assert!(err.to_string().contains("SHKIA_CONFIG_PATH_THAT_IS_NEVER_SET"));
	}
}

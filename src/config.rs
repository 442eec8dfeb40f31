/* Copyright 2024-2025 the sunlamp developers
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>.
 */

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    /// Degrees, positive north. Out-of-range values are passed through
    /// to the calculation unvalidated.
    pub latitude: f64,
    /// Degrees, positive east
    pub longitude: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockConfig {
    /// Simulated instant at startup; wall clock when absent
    pub start: Option<DateTime<Utc>>,
    /// Simulated seconds per real second
    #[serde(default = "time_scale_default")]
    pub time_scale: f64,
}

fn time_scale_default() -> f64 {
    1.0
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start: None,
            time_scale: time_scale_default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    /// Tick period
    #[serde(default = "interval_default", with = "humantime_serde")]
    pub interval: Duration,
    /// Recompute the light only every Nth tick
    #[serde(default = "frame_steps_default")]
    pub frame_steps: u32,
}

fn interval_default() -> Duration {
    Duration::from_secs(1)
}

fn frame_steps_default() -> u32 {
    1
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            interval: interval_default(),
            frame_steps: frame_steps_default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub location: LocationConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub driver: DriverConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn full_config() {
        let config: Config = toml::from_str(
            r#"
            [location]
            latitude = 51.5
            longitude = -0.1

            [clock]
            start = "2024-06-20T04:00:00Z"
            time_scale = 60.0

            [driver]
            interval = "250ms"
            frame_steps = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.location.latitude, 51.5);
        assert_eq!(config.location.longitude, -0.1);
        assert_eq!(
            config.clock.start,
            Some(Utc.with_ymd_and_hms(2024, 6, 20, 4, 0, 0).unwrap())
        );
        assert_eq!(config.clock.time_scale, 60.0);
        assert_eq!(config.driver.interval, Duration::from_millis(250));
        assert_eq!(config.driver.frame_steps, 4);
    }

    #[test]
    fn defaults() {
        let config: Config = toml::from_str(
            r#"
            [location]
            latitude = -33.9
            longitude = 18.4
            "#,
        )
        .unwrap();
        assert_eq!(config.clock.start, None);
        assert_eq!(config.clock.time_scale, 1.0);
        assert_eq!(config.driver.interval, Duration::from_secs(1));
        assert_eq!(config.driver.frame_steps, 1);
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [location]
            latitude = 0.0
            longitude = 0.0
            altitude = 100.0
            "#,
        );
        assert!(result.is_err());
    }
}

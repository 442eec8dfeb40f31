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

//! Sink interface between the driver and whatever renders the light

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use std::error::Error;

/// Altitude below which the light is fully dark, in degrees
const DARK_ALTITUDE: f64 = -12.0;

/// One orientation/intensity update for a directional light.
///
/// Pitch is the sun's altitude and yaw its azimuth, both in degrees;
/// intensity is in [0, 1].
#[derive(Clone, PartialEq, Debug)]
pub struct LightUpdate {
    pub time: DateTime<Utc>,
    pub pitch: f64,
    pub yaw: f64,
    pub intensity: f64,
}

#[async_trait]
pub trait LightSink: Send {
    async fn apply(&mut self, update: LightUpdate) -> Result<(), Box<dyn Error>>;
}

pub struct NullSink;

#[async_trait]
impl LightSink for NullSink {
    async fn apply(&mut self, _: LightUpdate) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

/// Sink that reports each update through the logger. Used by the daemon
/// when no rendering host is attached.
pub struct LogSink;

#[async_trait]
impl LightSink for LogSink {
    async fn apply(&mut self, update: LightUpdate) -> Result<(), Box<dyn Error>> {
        info!(
            "{}: pitch {:.2}°, yaw {:.2}°, intensity {:.3}",
            update.time, update.pitch, update.yaw, update.intensity
        );
        Ok(())
    }
}

/// Map the sun's altitude in degrees to a light intensity in [0, 1].
///
/// Ramps linearly from 0 at -12° (end of nautical twilight) to 1 at the
/// horizon, and is clamped outside that band rather than extrapolated.
pub fn intensity(altitude: f64) -> f64 {
    ((altitude - DARK_ALTITUDE) / -DARK_ALTITUDE).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_ramp() {
        assert_eq!(intensity(-12.0), 0.0);
        assert_eq!(intensity(-6.0), 0.5);
        assert_eq!(intensity(0.0), 1.0);
    }

    #[tokio::test]
    async fn null_sink_discards() {
        let update = LightUpdate {
            time: Utc::now(),
            pitch: 10.0,
            yaw: 180.0,
            intensity: 1.0,
        };
        NullSink.apply(update).await.unwrap();
    }

    #[test]
    fn intensity_clamped() {
        // Clamped, not extrapolated, outside the twilight band
        assert_eq!(intensity(-90.0), 0.0);
        assert_eq!(intensity(-12.5), 0.0);
        assert_eq!(intensity(30.0), 1.0);
        assert_eq!(intensity(90.0), 1.0);
    }
}

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

//! Periodic loop that keeps a light sink in step with the simulated sun

use chrono::{DateTime, Duration, Utc};
use log::warn;
use std::cmp::max;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::config::{Config, LocationConfig};
use crate::light::{LightSink, LightUpdate, intensity};
use crate::sun::sun_position;

/// Simulated clock: advances by `scale` simulated seconds per real second.
pub struct SimClock {
    time: DateTime<Utc>,
    scale: f64,
}

impl SimClock {
    pub fn new(start: DateTime<Utc>, scale: f64) -> Self {
        Self { time: start, scale }
    }

    /// Advance the clock by a real-time delta, scaled.
    pub fn advance(&mut self, delta: std::time::Duration) {
        let nanos = delta.as_secs_f64() * self.scale * 1e9;
        self.time += Duration::nanoseconds(nanos as i64);
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Compute the light state for one instant at a location.
pub fn light_update(time: DateTime<Utc>, location: &LocationConfig) -> LightUpdate {
    let position = sun_position(&time, location.latitude, location.longitude);
    let pitch = position.altitude.to_degrees();
    LightUpdate {
        time,
        pitch,
        yaw: position.azimuth.to_degrees(),
        intensity: intensity(pitch),
    }
}

/// Run the update loop until the token is cancelled.
///
/// Each tick advances the simulated clock; the position is recomputed
/// and pushed to the sink only on every `frame_steps`-th tick. The
/// throttle changes the update cadence, never the computed values. A
/// sink failure is logged and the loop carries on.
pub async fn drive_light(sink: &mut dyn LightSink, config: &Config, token: CancellationToken) {
    let start = config.clock.start.unwrap_or_else(Utc::now);
    let mut clock = SimClock::new(start, config.clock.time_scale);
    let frame_steps = max(config.driver.frame_steps, 1);
    let mut frame_step: u32 = 0;
    let mut interval = tokio::time::interval(config.driver.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = token.cancelled() => break,
        }
        clock.advance(config.driver.interval);
        if frame_step == 0 {
            let update = light_update(clock.now(), &config.location);
            if let Err(err) = sink.apply(update).await {
                warn!("Failed to update light: {err}");
            }
        }
        frame_step = (frame_step + 1) % frame_steps;
    }
}

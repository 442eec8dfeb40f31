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

use clap::Parser;
use log::info;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use sunlamp::config::Config;
use sunlamp::driver::{drive_light, light_update};
use sunlamp::light::LogSink;

#[derive(Parser)]
#[clap(author, version)]
struct Args {
    #[clap()]
    config_file: PathBuf,
}

#[cfg(unix)]
async fn wait_shutdown() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        _ = sigint.recv() => {},
        _ = sigterm.recv() => {},
    };
    Ok(())
}

#[cfg(not(unix))]
async fn wait_shutdown() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let config: Config = toml::from_str(&std::fs::read_to_string(args.config_file)?)?;

    let start = config.clock.start.unwrap_or_else(chrono::Utc::now);
    let first = light_update(start, &config.location);
    info!(
        "Sun at {}: pitch {:.2}°, yaw {:.2}°, intensity {:.3}",
        first.time, first.pitch, first.yaw, first.intensity
    );

    let token = CancellationToken::new();
    let driver_token = token.clone();
    let driver_handle = tokio::spawn(async move {
        let mut sink = LogSink;
        drive_light(&mut sink, &config, driver_token).await;
    });

    wait_shutdown().await?;
    token.cancel();
    driver_handle.await?;
    Ok(())
}

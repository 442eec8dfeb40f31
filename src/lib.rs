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

//! Drive a directional light from the apparent position of the sun.
//!
//! The [`sun`] module holds the pure position calculation; [`driver`]
//! runs it on a simulated clock and pushes the result through a
//! [`light::LightSink`].

pub mod config;
pub mod driver;
pub mod light;
pub mod sun;

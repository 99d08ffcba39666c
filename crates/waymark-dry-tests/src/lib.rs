// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Waymark crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`lane`] - Straight, axis-aligned lanes
//! - [`network`] - In-memory road network built from straight lanes
//! - [`region`] - Bounding region doubles with a scripted overlap answer
//! - [`objects`] - Box and object builders

pub mod lane;
pub mod network;
pub mod objects;
pub mod region;

pub use lane::StraightLane;
pub use network::StraightRoadNetwork;
pub use objects::{BoxBuilder, ObjectBuilder};
pub use region::StubRegion;

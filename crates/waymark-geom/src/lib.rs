// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Geometry primitives for Waymark.

This crate provides:
- Double-precision math (`Vec3`, `Mat3`, `RollPitchYaw`).
- Overlap classification between regions (`OverlappingType`).
- The bounding-region capability (`BoundingRegion`, `RegionShape`).
- Oriented bounding boxes (`BoundingBox`) with Separating Axis Theorem tests.

Design notes:
- Everything is expressed in the fixed Inertial frame.
- `f64` throughout; the SAT guard epsilon is tuned for double precision.
- Geometry is immutable once constructed; every query is a pure function.
"]

/// Error type for geometry construction and queries.
pub mod error;
pub mod math;
/// Foundational geometric types.
pub mod types;

pub use error::GeomError;
pub use math::{Mat3, RollPitchYaw, Vec3};
pub use types::bounding_box::BoundingBox;
pub use types::overlap::OverlappingType;
pub use types::region::{BoundingRegion, RegionShape};

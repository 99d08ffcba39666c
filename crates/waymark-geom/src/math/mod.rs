// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Double-precision math helpers: vectors, rotation matrices and Euler
//! orientations in the Inertial frame.
//!
//! All operations use `f64`; geometry tests downstream (notably the SAT
//! overlap test) rely on double precision to keep their epsilon guards tight.

mod mat3;
mod rpy;
mod vec3;

pub use mat3::Mat3;
pub use rpy::RollPitchYaw;
pub use vec3::Vec3;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// An inverted range is a caller bug; in release builds the lower bound wins.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.min(max).max(min)
}

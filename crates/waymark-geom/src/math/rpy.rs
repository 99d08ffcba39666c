// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Mat3;

/// Orientation expressed as roll, pitch and yaw Euler angles in radians.
///
/// The rotation matrix is `R = Rz(yaw) · Ry(pitch) · Rx(roll)`: roll about X
/// is applied first, yaw about Z last.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 3]", into = "[f64; 3]"))]
pub struct RollPitchYaw {
    roll: f64,
    pitch: f64,
    yaw: f64,
}

impl RollPitchYaw {
    /// Creates an orientation from its three angles.
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// No rotation.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Rotation about X, in radians.
    pub fn roll(&self) -> f64 {
        self.roll
    }

    /// Rotation about Y, in radians.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Rotation about Z, in radians.
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Rotation matrix `Rz(yaw) · Ry(pitch) · Rx(roll)`.
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::rotation_z(self.yaw)
            .multiply(&Mat3::rotation_y(self.pitch))
            .multiply(&Mat3::rotation_x(self.roll))
    }
}

impl From<[f64; 3]> for RollPitchYaw {
    fn from([roll, pitch, yaw]: [f64; 3]) -> Self {
        Self::new(roll, pitch, yaw)
    }
}

impl From<RollPitchYaw> for [f64; 3] {
    fn from(value: RollPitchYaw) -> Self {
        [value.roll, value.pitch, value.yaw]
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec3;

/// Row‑major 3×3 matrix used for rotations in the Inertial frame.
///
/// - `transform` computes `M · v` with `v` as a column vector.
/// - Rotation builders produce active (right-handed) rotations.
///
/// # Examples
/// ```
/// use core::f64::consts::FRAC_PI_2;
/// use waymark_geom::{Mat3, Vec3};
/// // +90° about Z maps +X to +Y.
/// let v = Mat3::rotation_z(FRAC_PI_2).transform(&Vec3::UNIT_X);
/// assert!((v.y() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Creates a matrix from row-major data.
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Row `idx` as a vector.
    pub fn row(&self, idx: usize) -> Vec3 {
        Vec3::from(self.rows[idx])
    }

    /// Column `idx` as a vector.
    pub fn column(&self, idx: usize) -> Vec3 {
        Vec3::new(self.rows[0][idx], self.rows[1][idx], self.rows[2][idx])
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.row(i).dot(&rhs.column(j));
            }
        }
        Self::from_rows(out)
    }

    /// Applies the matrix to a column vector (`self * v`).
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Transposed matrix.
    pub fn transpose(&self) -> Self {
        Self::from_rows([
            self.column(0).to_array(),
            self.column(1).to_array(),
            self.column(2).to_array(),
        ])
    }

    /// Inverse of a rotation matrix.
    ///
    /// Rotations are orthonormal, so this is the transpose; callers must not
    /// pass scaled or sheared matrices.
    pub fn inverse(&self) -> Self {
        self.transpose()
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::GeomError;
use crate::math::{Mat3, RollPitchYaw, Vec3};
use crate::types::overlap::OverlappingType;
use crate::types::region::{BoundingRegion, RegionShape};

/// Guard added to the absolute rotation terms of the SAT test so that
/// near-parallel edge pairs (whose cross product degenerates) never produce a
/// false separating axis.
pub const SAT_EPSILON: f64 = 1e-6;

/// Oriented bounding box in the Inertial frame.
///
/// Conventions:
/// - `position` is the centroid.
/// - `box_size` holds the full length, width and height along the box's
///   local X, Y and Z axes.
/// - `orientation` maps Inertial-frame offsets into the box frame: a point
///   `p` has box-local coordinates `R · (p − position)`, and box-local
///   vertices reach the Inertial frame through `R⁻¹`.
/// - `tolerance` widens containment on every face.
///
/// Invariants:
/// - `tolerance >= 0` and every `box_size` component is `> 0`; both are
///   enforced by [`BoundingBox::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    position: Vec3,
    box_size: Vec3,
    orientation: RollPitchYaw,
    tolerance: f64,
    rotation: Mat3,
}

impl BoundingBox {
    /// Creates a box from its centroid, full size, orientation and tolerance.
    ///
    /// # Errors
    /// - [`GeomError::NegativeTolerance`] if `tolerance` is negative or NaN.
    /// - [`GeomError::InvalidBoxSize`] if a size component is not strictly
    ///   positive.
    pub fn new(
        position: Vec3,
        box_size: Vec3,
        orientation: RollPitchYaw,
        tolerance: f64,
    ) -> Result<Self, GeomError> {
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(GeomError::NegativeTolerance(tolerance));
        }
        if box_size
            .to_array()
            .iter()
            .any(|c| c.is_nan() || *c <= 0.0)
        {
            return Err(GeomError::InvalidBoxSize {
                x: box_size.x(),
                y: box_size.y(),
                z: box_size.z(),
            });
        }
        Ok(Self {
            position,
            box_size,
            orientation,
            tolerance,
            rotation: orientation.to_matrix(),
        })
    }

    /// Full size along the local axes.
    pub fn box_size(&self) -> Vec3 {
        self.box_size
    }

    /// Orientation of the box.
    pub fn orientation(&self) -> RollPitchYaw {
        self.orientation
    }

    /// Containment margin.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Half of [`Self::box_size`].
    pub fn half_extents(&self) -> Vec3 {
        self.box_size.scale(0.5)
    }

    /// Expresses an Inertial-frame point in the box frame.
    pub fn to_box_frame(&self, point: &Vec3) -> Vec3 {
        self.rotation.transform(&point.sub(&self.position))
    }

    /// Unit vectors of the box's local X, Y and Z axes in the Inertial frame.
    pub fn axes(&self) -> [Vec3; 3] {
        // Columns of R⁻¹, i.e. the rows of R.
        [self.rotation.row(0), self.rotation.row(1), self.rotation.row(2)]
    }

    /// The eight corners in the Inertial frame.
    ///
    /// The order is fixed: `(+,+,+)`, `(-,+,+)`, `(+,-,+)`, `(+,+,-)`,
    /// `(-,-,+)`, `(+,-,-)`, `(-,+,-)`, `(-,-,-)` in box-local signs.
    pub fn vertices(&self) -> [Vec3; 8] {
        const SIGNS: [[f64; 3]; 8] = [
            [1.0, 1.0, 1.0],
            [-1.0, 1.0, 1.0],
            [1.0, -1.0, 1.0],
            [1.0, 1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, -1.0],
        ];
        let [hx, hy, hz] = self.half_extents().to_array();
        let inverse = self.rotation.inverse();
        SIGNS.map(|[sx, sy, sz]| {
            inverse
                .transform(&Vec3::new(sx * hx, sy * hy, sz * hz))
                .add(&self.position)
        })
    }

    /// Returns `true` when every vertex of `other` is inside `self`.
    pub fn contains_box(&self, other: &Self) -> bool {
        other.vertices().iter().all(|v| self.contains(v))
    }

    /// Separating Axis Theorem test between two oriented boxes.
    ///
    /// Checks the 15 candidate axes: the three face normals of each box and
    /// the nine cross products of their edges. Touching boxes intersect. The
    /// half-extents of `self` are widened by its tolerance so this test and
    /// [`Self::contains_box`] share the same margin.
    pub fn intersects(&self, other: &Self) -> bool {
        let a = self.half_extents().to_array().map(|h| h + self.tolerance);
        let b = other.half_extents().to_array();
        let a_axes = self.axes();
        let b_axes = other.axes();

        // Rotation of `other` expressed in `self`'s frame, plus the guarded
        // absolute values used for the projected radii.
        let mut r = [[0.0_f64; 3]; 3];
        let mut abs_r = [[0.0_f64; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                r[i][j] = a_axes[i].dot(&b_axes[j]);
                abs_r[i][j] = r[i][j].abs() + SAT_EPSILON;
            }
        }

        let d = other.position.sub(&self.position);
        let t = [d.dot(&a_axes[0]), d.dot(&a_axes[1]), d.dot(&a_axes[2])];

        // Face normals of `self`.
        for i in 0..3 {
            let ra = a[i];
            let rb = b[0] * abs_r[i][0] + b[1] * abs_r[i][1] + b[2] * abs_r[i][2];
            if t[i].abs() > ra + rb {
                return false;
            }
        }

        // Face normals of `other`.
        for j in 0..3 {
            let ra = a[0] * abs_r[0][j] + a[1] * abs_r[1][j] + a[2] * abs_r[2][j];
            let rb = b[j];
            let dist = t[0] * r[0][j] + t[1] * r[1][j] + t[2] * r[2][j];
            if dist.abs() > ra + rb {
                return false;
            }
        }

        // Edge-edge cross products A_i × B_j.
        for i in 0..3 {
            let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
            for j in 0..3 {
                let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
                let ra = a[i1] * abs_r[i2][j] + a[i2] * abs_r[i1][j];
                let rb = b[j1] * abs_r[i][j2] + b[j2] * abs_r[i][j1];
                let dist = t[i2] * r[i1][j] - t[i1] * r[i2][j];
                if dist.abs() > ra + rb {
                    return false;
                }
            }
        }

        true
    }
}

impl BoundingRegion for BoundingBox {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn contains(&self, point: &Vec3) -> bool {
        let local = self.to_box_frame(point);
        let half = self.half_extents();
        (0..3).all(|i| {
            let limit = half.component(i) + self.tolerance;
            let c = local.component(i);
            c <= limit && c >= -limit
        })
    }

    fn overlaps(&self, other: &dyn BoundingRegion) -> Result<OverlappingType, GeomError> {
        match other.shape() {
            RegionShape::Box(other) => Ok(if self.contains_box(other) {
                OverlappingType::Contained
            } else if self.intersects(other) {
                OverlappingType::Intersected
            } else {
                OverlappingType::Disjoint
            }),
            RegionShape::Custom(name) => Err(GeomError::UnsupportedRegion {
                region: "box",
                other: name,
            }),
        }
    }

    fn shape(&self) -> RegionShape<'_> {
        RegionShape::Box(self)
    }
}

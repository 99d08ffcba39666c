// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bounding region doubles.

use waymark_geom::{BoundingRegion, GeomError, OverlappingType, RegionShape, Vec3};

/// Region of an unknown shape whose overlap answer is scripted.
///
/// It contains only its own position and reports [`RegionShape::Custom`],
/// so built-in regions refuse to classify it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StubRegion {
    position: Vec3,
    overlap: OverlappingType,
}

impl StubRegion {
    /// Shape name reported by [`BoundingRegion::shape`].
    pub const SHAPE: &'static str = "stub";

    /// Creates a stub at `position` answering `Disjoint` to every overlap.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            overlap: OverlappingType::Disjoint,
        }
    }

    /// Scripts the answer of [`BoundingRegion::overlaps`].
    pub fn with_overlap(mut self, overlap: OverlappingType) -> Self {
        self.overlap = overlap;
        self
    }
}

impl BoundingRegion for StubRegion {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn contains(&self, point: &Vec3) -> bool {
        *point == self.position
    }

    fn overlaps(&self, _other: &dyn BoundingRegion) -> Result<OverlappingType, GeomError> {
        Ok(self.overlap)
    }

    fn shape(&self) -> RegionShape<'_> {
        RegionShape::Custom(Self::SHAPE)
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt::Debug;

use crate::error::GeomError;
use crate::math::Vec3;
use crate::types::bounding_box::BoundingBox;
use crate::types::overlap::OverlappingType;

/// Concrete shape behind a [`BoundingRegion`].
///
/// The set is closed: a new shape is added here deliberately, and every
/// implementation decides explicitly which shapes it can classify against.
/// `Custom` covers implementations that live outside this crate (test doubles,
/// experimental shapes); they are identified by name only, so no built-in
/// region can reason about their geometry.
#[derive(Debug, Clone, Copy)]
pub enum RegionShape<'a> {
    /// Oriented bounding box.
    Box(&'a BoundingBox),
    /// Shape implemented outside this crate.
    Custom(&'static str),
}

impl RegionShape<'_> {
    /// Short shape name used in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Box(_) => "box",
            Self::Custom(name) => name,
        }
    }
}

/// Bounding volume located in the Inertial frame.
///
/// Invariant: `contains(&position())` is always `true`; downstream code
/// treats the position as a representative point of the region.
pub trait BoundingRegion: Debug {
    /// Reference point of the region (its centroid for every built-in shape).
    fn position(&self) -> Vec3;

    /// Returns `true` when `point` lies within the region widened by its
    /// tolerance. Boundaries are inclusive.
    fn contains(&self, point: &Vec3) -> bool;

    /// Classifies `other` relative to `self`.
    ///
    /// - `Contained`: every point of `other` is inside `self`.
    /// - `Intersected`: the regions share a point but `other` sticks out.
    /// - `Disjoint`: no shared point.
    ///
    /// Never returns `All`.
    ///
    /// # Errors
    /// [`GeomError::UnsupportedRegion`] when this implementation cannot reason
    /// about the concrete shape of `other`.
    fn overlaps(&self, other: &dyn BoundingRegion) -> Result<OverlappingType, GeomError>;

    /// Concrete shape of this region.
    fn shape(&self) -> RegionShape<'_>;
}

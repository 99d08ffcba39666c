// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Straight lanes running along the Inertial `+x` axis.
//!
//! A lane starts at `origin` and extends `length` meters along `+x`. Its
//! lateral axis `r` is `+y` and its height `h` is `+z`, so the lane frame is
//! a pure translation of the Inertial frame. Projections keep `h` at zero:
//! the nearest position always lies on the road surface.

use waymark_geom::math::clamp;
use waymark_geom::Vec3;
use waymark_object::{Lane, LaneId, LanePosition, LanePositionResult, RBounds};

/// Lane double with closed-form geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct StraightLane {
    id: LaneId,
    origin: Vec3,
    length: f64,
    half_width: f64,
    segment_half_width: f64,
}

impl StraightLane {
    /// Creates a lane `2 * half_width` wide whose segment is as wide as the
    /// lane itself.
    pub fn new(id: impl Into<String>, origin: Vec3, length: f64, half_width: f64) -> Self {
        Self {
            id: LaneId::new(id),
            origin,
            length,
            half_width,
            segment_half_width: half_width,
        }
    }

    /// Widens the enclosing segment; projections may then report an `r`
    /// outside the lane bounds, up to `segment_half_width`.
    pub fn with_segment_half_width(mut self, segment_half_width: f64) -> Self {
        self.segment_half_width = segment_half_width.max(self.half_width);
        self
    }

    /// Start of the lane centerline.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// End of the lane centerline.
    pub fn end(&self) -> Vec3 {
        self.origin.add(&Vec3::new(self.length, 0.0, 0.0))
    }
}

impl Lane for StraightLane {
    fn id(&self) -> &LaneId {
        &self.id
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn to_lane_position(&self, inertial: &Vec3) -> LanePositionResult {
        let local = inertial.sub(&self.origin);
        let lane_position = LanePosition::new(
            clamp(local.x(), 0.0, self.length),
            clamp(local.y(), -self.segment_half_width, self.segment_half_width),
            0.0,
        );
        let nearest_position = self.to_inertial_position(&lane_position);
        LanePositionResult {
            lane_position,
            nearest_position,
            distance: inertial.distance(&nearest_position),
        }
    }

    fn to_inertial_position(&self, lane_position: &LanePosition) -> Vec3 {
        self.origin.add(&Vec3::new(
            lane_position.s(),
            lane_position.r(),
            lane_position.h(),
        ))
    }

    fn lane_bounds(&self, _s: f64) -> RBounds {
        RBounds::new(-self.half_width, self.half_width)
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Road-network provider interface consumed by the object queries.
//!
//! The road network itself (lane geometry, position resolution, routing) is
//! supplied by the application; this module only fixes the seam. Lanes are
//! parameterized by a longitudinal coordinate `s`, a lateral offset `r` and a
//! height `h`.

use std::fmt;

use waymark_geom::Vec3;

/// Lane identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LaneId(String);

impl LaneId {
    /// Wraps a string as a lane id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LaneId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Position in a lane frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanePosition {
    s: f64,
    r: f64,
    h: f64,
}

impl LanePosition {
    /// Creates a lane position.
    pub const fn new(s: f64, r: f64, h: f64) -> Self {
        Self { s, r, h }
    }

    /// Longitudinal coordinate.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Lateral coordinate.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Height above the road surface.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Copy with the lateral coordinate replaced.
    pub fn with_r(self, r: f64) -> Self {
        Self { r, ..self }
    }
}

/// Result of projecting an Inertial-frame point onto a lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanePositionResult {
    /// Closest lane position. `s` is within the lane, `r` may fall outside
    /// the lane bounds (but within the enclosing segment).
    pub lane_position: LanePosition,
    /// Inertial-frame point matching `lane_position`.
    pub nearest_position: Vec3,
    /// Distance from the query point to `nearest_position`.
    pub distance: f64,
}

/// Lateral bounds `[min, max]` of a lane at a given `s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RBounds {
    min: f64,
    max: f64,
}

impl RBounds {
    /// Creates bounds; `min` is expected to be `<= max`.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower (right-hand) bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper (left-hand) bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `r` lies within the bounds (inclusive).
    pub fn contains(&self, r: f64) -> bool {
        r >= self.min && r <= self.max
    }

    /// `r` clamped into the bounds.
    pub fn clamp(&self, r: f64) -> f64 {
        waymark_geom::math::clamp(r, self.min, self.max)
    }
}

/// A single lane of the road network.
pub trait Lane: fmt::Debug {
    /// Lane id, unique within the network.
    fn id(&self) -> &LaneId;

    /// Length along `s`.
    fn length(&self) -> f64;

    /// Projects an Inertial-frame point onto the lane.
    fn to_lane_position(&self, inertial: &Vec3) -> LanePositionResult;

    /// Maps a lane position back to the Inertial frame.
    fn to_inertial_position(&self, lane_position: &LanePosition) -> Vec3;

    /// Lateral bounds of the lane at `s`.
    fn lane_bounds(&self, s: f64) -> RBounds;
}

/// A position on a specific lane.
#[derive(Debug, Clone, Copy)]
pub struct RoadPosition<'a> {
    /// Lane holding the position.
    pub lane: &'a dyn Lane,
    /// Position in `lane`'s frame.
    pub pos: LanePosition,
}

/// Result of resolving an Inertial-frame point against the road network.
#[derive(Debug, Clone, Copy)]
pub struct RoadPositionResult<'a> {
    /// Resolved road position (within lane bounds).
    pub road_position: RoadPosition<'a>,
    /// Inertial-frame point matching `road_position`.
    pub nearest_position: Vec3,
    /// Distance from the query point to `nearest_position`.
    pub distance: f64,
}

/// Longitudinal interval `[s0, s1]` on a lane; `s1 < s0` travels against `s`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SRange {
    s0: f64,
    s1: f64,
}

impl SRange {
    /// Creates a range.
    pub const fn new(s0: f64, s1: f64) -> Self {
        Self { s0, s1 }
    }

    /// Start coordinate.
    pub fn s0(&self) -> f64 {
        self.s0
    }

    /// End coordinate.
    pub fn s1(&self) -> f64 {
        self.s1
    }

    /// Travelled distance.
    pub fn size(&self) -> f64 {
        (self.s1 - self.s0).abs()
    }
}

/// Interval travelled on one lane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneSRange {
    lane_id: LaneId,
    s_range: SRange,
}

impl LaneSRange {
    /// Creates a lane interval.
    pub fn new(lane_id: LaneId, s_range: SRange) -> Self {
        Self { lane_id, s_range }
    }

    /// Lane travelled.
    pub fn lane_id(&self) -> &LaneId {
        &self.lane_id
    }

    /// Interval travelled.
    pub fn s_range(&self) -> SRange {
        self.s_range
    }

    /// Travelled distance.
    pub fn length(&self) -> f64 {
        self.s_range.size()
    }
}

/// Ordered sequence of lane intervals connecting two road positions.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneSRoute {
    ranges: Vec<LaneSRange>,
}

impl LaneSRoute {
    /// Creates a route from its intervals.
    pub fn new(ranges: Vec<LaneSRange>) -> Self {
        Self { ranges }
    }

    /// Intervals in travel order.
    pub fn ranges(&self) -> &[LaneSRange] {
        &self.ranges
    }

    /// Total travelled distance.
    pub fn length(&self) -> f64 {
        self.ranges.iter().map(LaneSRange::length).sum()
    }
}

/// Road-network provider.
pub trait RoadNetwork {
    /// Every lane in the network.
    fn lanes(&self) -> Vec<&dyn Lane>;

    /// Lane with `id`, if any.
    fn lane(&self, id: &LaneId) -> Option<&dyn Lane> {
        self.lanes().into_iter().find(|lane| lane.id() == id)
    }

    /// Closest in-bounds position of every lane within `radius` of `inertial`.
    fn find_road_positions(&self, inertial: &Vec3, radius: f64) -> Vec<RoadPositionResult<'_>>;

    /// Closest in-bounds road position to `inertial`; `None` for an empty
    /// network.
    fn to_road_position(&self, inertial: &Vec3) -> Option<RoadPositionResult<'_>>;

    /// Every route from `start` to `end` no longer than `max_length`.
    fn derive_routes(
        &self,
        start: &RoadPosition<'_>,
        end: &RoadPosition<'_>,
        max_length: f64,
    ) -> Vec<LaneSRoute>;
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory road network built from [`StraightLane`]s.
//!
//! Connections are directed: `connect(a, b)` lets a route leave the end of
//! `a` and enter `b` at `s = 0`. Routes always travel towards increasing `s`.

use rustc_hash::FxHashMap;
use waymark_geom::Vec3;
use waymark_object::{
    Lane, LaneId, LaneSRange, LaneSRoute, RoadNetwork, RoadPosition, RoadPositionResult, SRange,
};

use crate::lane::StraightLane;

/// Road network double.
#[derive(Debug, Clone, Default)]
pub struct StraightRoadNetwork {
    lanes: Vec<StraightLane>,
    successors: FxHashMap<LaneId, Vec<LaneId>>,
}

impl StraightRoadNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a lane.
    pub fn with_lane(mut self, lane: StraightLane) -> Self {
        self.lanes.push(lane);
        self
    }

    /// Lets routes continue from the end of `from` into `to`.
    pub fn connect(mut self, from: &str, to: &str) -> Self {
        self.successors
            .entry(LaneId::from(from))
            .or_default()
            .push(LaneId::from(to));
        self
    }

    fn lane_by_id(&self, id: &LaneId) -> Option<&StraightLane> {
        self.lanes.iter().find(|lane| lane.id() == id)
    }

    /// Closest in-bounds position on `lane` to `inertial`.
    fn in_bounds_position<'a>(
        lane: &'a StraightLane,
        inertial: &Vec3,
    ) -> RoadPositionResult<'a> {
        let projection = lane.to_lane_position(inertial);
        let bounds = lane.lane_bounds(projection.lane_position.s());
        let pos = projection
            .lane_position
            .with_r(bounds.clamp(projection.lane_position.r()));
        let nearest_position = lane.to_inertial_position(&pos);
        RoadPositionResult {
            road_position: RoadPosition { lane, pos },
            nearest_position,
            distance: inertial.distance(&nearest_position),
        }
    }

    /// Depth-first walk over lane sequences that never revisit a lane.
    fn walk(&self, path: &mut Vec<LaneId>, end: &LaneId, found: &mut Vec<Vec<LaneId>>) {
        let Some(current) = path.last().cloned() else {
            return;
        };
        let Some(next) = self.successors.get(&current) else {
            return;
        };
        for successor in next {
            if path.contains(successor) {
                continue;
            }
            path.push(successor.clone());
            if successor == end {
                found.push(path.clone());
            } else {
                self.walk(path, end, found);
            }
            path.pop();
        }
    }
}

impl RoadNetwork for StraightRoadNetwork {
    fn lanes(&self) -> Vec<&dyn Lane> {
        self.lanes.iter().map(|lane| lane as &dyn Lane).collect()
    }

    fn find_road_positions(&self, inertial: &Vec3, radius: f64) -> Vec<RoadPositionResult<'_>> {
        self.lanes
            .iter()
            .map(|lane| Self::in_bounds_position(lane, inertial))
            .filter(|result| result.distance <= radius)
            .collect()
    }

    fn to_road_position(&self, inertial: &Vec3) -> Option<RoadPositionResult<'_>> {
        self.lanes
            .iter()
            .map(|lane| Self::in_bounds_position(lane, inertial))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    fn derive_routes(
        &self,
        start: &RoadPosition<'_>,
        end: &RoadPosition<'_>,
        max_length: f64,
    ) -> Vec<LaneSRoute> {
        let start_id = start.lane.id();
        let end_id = end.lane.id();
        let mut routes = Vec::new();

        if start_id == end_id && end.pos.s() >= start.pos.s() {
            routes.push(LaneSRoute::new(vec![LaneSRange::new(
                start_id.clone(),
                SRange::new(start.pos.s(), end.pos.s()),
            )]));
        }

        let mut paths = Vec::new();
        self.walk(&mut vec![start_id.clone()], end_id, &mut paths);
        for path in paths {
            let last = path.len() - 1;
            let mut ranges = Vec::with_capacity(path.len());
            for (i, id) in path.into_iter().enumerate() {
                let Some(lane) = self.lane_by_id(&id) else {
                    break;
                };
                let s0 = if i == 0 { start.pos.s() } else { 0.0 };
                let s1 = if i == last { end.pos.s() } else { lane.length() };
                ranges.push(LaneSRange::new(id, SRange::new(s0, s1)));
            }
            if ranges.len() == last + 1 {
                routes.push(LaneSRoute::new(ranges));
            }
        }

        routes.retain(|route| route.length() <= max_length);
        routes
    }
}

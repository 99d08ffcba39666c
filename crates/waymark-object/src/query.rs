// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Queries relating objects to a road network.

use rustc_hash::FxHashSet;
use tracing::{debug, instrument, trace, warn};
use waymark_geom::{OverlappingType, RegionShape, Vec3};

use crate::book::ObjectBook;
use crate::error::ObjectError;
use crate::object::Object;
use crate::road::{Lane, LaneId, LaneSRoute, RoadNetwork};

/// Tunables for [`SimpleObjectQuery`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QueryOptions {
    /// Longest route considered by [`ObjectQuery::route`]; unbounded by
    /// default.
    pub max_route_length: f64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            max_route_length: f64::INFINITY,
        }
    }
}

/// Relates the objects of a book to the lanes and routes of a road network.
pub trait ObjectQuery {
    /// Lanes intersected by `object`.
    ///
    /// # Errors
    /// See [`ObjectQuery::find_overlapping_lanes_in_by_type`].
    fn find_overlapping_lanes_in(&self, object: &Object) -> Result<Vec<&dyn Lane>, ObjectError> {
        self.find_overlapping_lanes_in_by_type(object, OverlappingType::Intersected)
    }

    /// Lanes related to `object` as `overlapping_type`.
    ///
    /// - `Intersected`: lanes sharing at least a point with the object.
    /// - `Disjoint`: every other lane of the network.
    ///
    /// # Errors
    /// - [`ObjectError::NotImplemented`] for `Contained`.
    /// - [`ObjectError::InvalidOverlappingType`] for `All`.
    /// - [`ObjectError::UnsupportedRegion`] when the object's region shape
    ///   cannot drive the lane search.
    fn find_overlapping_lanes_in_by_type(
        &self,
        object: &Object,
        overlapping_type: OverlappingType,
    ) -> Result<Vec<&dyn Lane>, ObjectError>;

    /// Shortest route from `origin`'s position to `target`'s position, or
    /// `None` when the positions cannot be resolved or are not connected.
    fn route(&self, origin: &Object, target: &Object) -> Option<LaneSRoute>;

    /// Book the objects come from.
    fn object_book(&self) -> &dyn ObjectBook;

    /// Road network the lanes come from.
    fn road_network(&self) -> &dyn RoadNetwork;
}

/// [`ObjectQuery`] that samples the road network around the object's
/// vertices.
///
/// Borrows both the book and the network; neither is copied nor kept alive
/// beyond the borrow.
pub struct SimpleObjectQuery<'a> {
    road_network: &'a dyn RoadNetwork,
    object_book: &'a dyn ObjectBook,
    options: QueryOptions,
}

impl<'a> SimpleObjectQuery<'a> {
    /// Creates a query with default options.
    pub fn new(road_network: &'a dyn RoadNetwork, object_book: &'a dyn ObjectBook) -> Self {
        Self::with_options(road_network, object_book, QueryOptions::default())
    }

    /// Creates a query with explicit options.
    pub fn with_options(
        road_network: &'a dyn RoadNetwork,
        object_book: &'a dyn ObjectBook,
        options: QueryOptions,
    ) -> Self {
        Self {
            road_network,
            object_book,
            options,
        }
    }

    /// Options in effect.
    pub fn options(&self) -> QueryOptions {
        self.options
    }

    /// Lanes whose closest in-bounds point to the object's centroid lies in
    /// the object's region.
    ///
    /// Candidates come from a sphere around each vertex whose radius reaches
    /// the centroid. This is a heuristic: very elongated boxes may miss lanes
    /// crossing them far from every vertex sphere.
    fn intersected_lanes(&self, object: &Object) -> Result<Vec<&'a dyn Lane>, ObjectError> {
        let region = object.bounding_region();
        let vertices = match region.shape() {
            RegionShape::Box(bounding_box) => bounding_box.vertices(),
            RegionShape::Custom(name) => return Err(ObjectError::UnsupportedRegion(name)),
        };
        let center = object.position();

        let mut visited: FxHashSet<LaneId> = FxHashSet::default();
        let mut lanes: Vec<&'a dyn Lane> = Vec::new();
        for vertex in &vertices {
            let radius = center.distance(vertex);
            for candidate in self.road_network.find_road_positions(vertex, radius) {
                let lane = candidate.road_position.lane;
                if !visited.insert(lane.id().clone()) {
                    continue;
                }
                let nearest = nearest_in_bounds(lane, &center);
                if region.contains(&nearest) {
                    trace!(lane = %lane.id(), "lane overlaps object");
                    lanes.push(lane);
                } else {
                    trace!(lane = %lane.id(), "closest lane point outside object");
                }
            }
        }
        Ok(lanes)
    }
}

/// Closest point of `lane` to `point`, with the lateral offset clamped into
/// the lane bounds.
fn nearest_in_bounds(lane: &dyn Lane, point: &Vec3) -> Vec3 {
    let projection = lane.to_lane_position(point);
    let lane_position = projection.lane_position;
    let bounds = lane.lane_bounds(lane_position.s());
    if bounds.contains(lane_position.r()) {
        projection.nearest_position
    } else {
        lane.to_inertial_position(&lane_position.with_r(bounds.clamp(lane_position.r())))
    }
}

impl std::fmt::Debug for SimpleObjectQuery<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleObjectQuery")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ObjectQuery for SimpleObjectQuery<'_> {
    #[instrument(level = "debug", skip_all, fields(object = %object.id(), kind = %overlapping_type))]
    fn find_overlapping_lanes_in_by_type(
        &self,
        object: &Object,
        overlapping_type: OverlappingType,
    ) -> Result<Vec<&dyn Lane>, ObjectError> {
        match overlapping_type {
            OverlappingType::Intersected => {
                let lanes = self.intersected_lanes(object)?;
                debug!(count = lanes.len(), "intersected lanes");
                Ok(lanes)
            }
            OverlappingType::Disjoint => {
                let hit: FxHashSet<LaneId> = self
                    .intersected_lanes(object)?
                    .iter()
                    .map(|lane| lane.id().clone())
                    .collect();
                let lanes: Vec<&dyn Lane> = self
                    .road_network
                    .lanes()
                    .into_iter()
                    .filter(|lane| !hit.contains(lane.id()))
                    .collect();
                debug!(count = lanes.len(), "disjoint lanes");
                Ok(lanes)
            }
            OverlappingType::Contained => {
                warn!("contained lane overlap requested");
                Err(ObjectError::NotImplemented("contained lane overlap"))
            }
            OverlappingType::All => Err(ObjectError::InvalidOverlappingType(overlapping_type)),
        }
    }

    #[instrument(level = "debug", skip_all, fields(origin = %origin.id(), target = %target.id()))]
    fn route(&self, origin: &Object, target: &Object) -> Option<LaneSRoute> {
        let start = self.road_network.to_road_position(&origin.position())?;
        let end = self.road_network.to_road_position(&target.position())?;
        let routes = self.road_network.derive_routes(
            &start.road_position,
            &end.road_position,
            self.options.max_route_length,
        );
        debug!(candidates = routes.len(), "derived routes");
        routes
            .into_iter()
            .min_by(|a, b| a.length().total_cmp(&b.length()))
    }

    fn object_book(&self) -> &dyn ObjectBook {
        self.object_book
    }

    fn road_network(&self) -> &dyn RoadNetwork {
        self.road_network
    }
}

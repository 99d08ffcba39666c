// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Lane overlap and routing queries against a straight-lane network.

use std::collections::BTreeSet;

use waymark_dry_tests::{BoxBuilder, ObjectBuilder, StraightLane, StraightRoadNetwork, StubRegion};
use waymark_geom::{OverlappingType, Vec3};
use waymark_object::{
    ErrorKind, Lane, ManualObjectBook, Object, ObjectBook, ObjectError, ObjectQuery,
    QueryOptions, SimpleObjectQuery,
};

/// Lanes `a` and `b` run side by side 10 m apart; `a` continues into `c`
/// directly or through a 30 m `detour` far to the right.
fn network() -> StraightRoadNetwork {
    StraightRoadNetwork::new()
        .with_lane(StraightLane::new("a", Vec3::ZERO, 20.0, 2.0))
        .with_lane(StraightLane::new("b", Vec3::new(0.0, 10.0, 0.0), 20.0, 2.0))
        .with_lane(StraightLane::new("c", Vec3::new(20.0, 0.0, 0.0), 20.0, 2.0))
        .with_lane(StraightLane::new("detour", Vec3::new(0.0, -20.0, 0.0), 30.0, 2.0))
        .connect("a", "c")
        .connect("a", "detour")
        .connect("detour", "c")
}

fn cube_at(id: &str, x: f64, y: f64) -> Object {
    ObjectBuilder::new(id)
        .region(BoxBuilder::cube(2.0).at(x, y, 0.0).build_region())
        .build()
}

fn lane_ids(lanes: &[&dyn Lane]) -> BTreeSet<String> {
    lanes.iter().map(|l| l.id().as_str().to_owned()).collect()
}

fn set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn box_on_a_lane_intersects_only_that_lane() {
    let network = network();
    let book = ManualObjectBook::new();
    let query = SimpleObjectQuery::new(&network, &book);
    let object = cube_at("on_a", 5.0, 0.0);

    let hit = query
        .find_overlapping_lanes_in(&object)
        .expect("box regions are supported");
    assert_eq!(lane_ids(&hit), set(&["a"]));

    let missed = query
        .find_overlapping_lanes_in_by_type(&object, OverlappingType::Disjoint)
        .expect("box regions are supported");
    assert_eq!(lane_ids(&missed), set(&["b", "c", "detour"]));
}

#[test]
fn tall_box_spans_adjacent_lanes() {
    let network = network();
    let book = ManualObjectBook::new();
    let query = SimpleObjectQuery::new(&network, &book);
    let object = ObjectBuilder::new("gantry")
        .region(
            BoxBuilder::new()
                .at(10.0, 5.0, 0.0)
                .size(4.0, 14.0, 2.0)
                .build_region(),
        )
        .build();

    let hit = query
        .find_overlapping_lanes_in_by_type(&object, OverlappingType::Intersected)
        .expect("box regions are supported");
    assert_eq!(lane_ids(&hit), set(&["a", "b"]));
}

#[test]
fn lane_near_a_vertex_but_outside_the_box_is_rejected() {
    let network = network();
    let book = ManualObjectBook::new();
    let query = SimpleObjectQuery::new(&network, &book);
    // Spans y in [2.5, 4.5]; lane `a` ends laterally at y = 2.
    let object = cube_at("shoulder", 5.0, 3.5);

    assert!(query
        .find_overlapping_lanes_in(&object)
        .expect("box regions are supported")
        .is_empty());
    let missed = query
        .find_overlapping_lanes_in_by_type(&object, OverlappingType::Disjoint)
        .expect("box regions are supported");
    assert_eq!(missed.len(), 4);
}

#[test]
fn lateral_offset_is_clamped_to_the_lane_bounds() {
    // The segment reaches y = 8 while the lane itself stops at y = 2, so the
    // projection of a point beside the lane lands on the shoulder.
    let network = StraightRoadNetwork::new()
        .with_lane(StraightLane::new("a", Vec3::ZERO, 20.0, 2.0).with_segment_half_width(8.0));
    let book = ManualObjectBook::new();
    let query = SimpleObjectQuery::new(&network, &book);

    // Spans y in [2.5, 4.5]: a bottom vertex is within reach of the lane
    // edge, and the shoulder point (5, 3.5) is inside the box, but the
    // clamped lane point (5, 2) is not.
    let near_shoulder = cube_at("near_shoulder", 5.0, 3.5);
    assert!(query
        .find_overlapping_lanes_in(&near_shoulder)
        .expect("box regions are supported")
        .is_empty());

    // Spans y in [3.5, 5.5]: the shoulder point (5, 4.5) is inside the box,
    // the clamped lane point (5, 2) is not.
    let on_shoulder = cube_at("on_shoulder", 5.0, 4.5);
    assert!(query
        .find_overlapping_lanes_in(&on_shoulder)
        .expect("box regions are supported")
        .is_empty());

    // Spans y in [1.5, 3.5] and still covers the lane edge at y = 2.
    let on_edge = cube_at("on_edge", 5.0, 2.5);
    let hit = query
        .find_overlapping_lanes_in(&on_edge)
        .expect("box regions are supported");
    assert_eq!(lane_ids(&hit), set(&["a"]));
}

#[test]
fn contained_and_all_are_refused() {
    let network = network();
    let book = ManualObjectBook::new();
    let query = SimpleObjectQuery::new(&network, &book);
    let object = cube_at("on_a", 5.0, 0.0);

    let contained = query
        .find_overlapping_lanes_in_by_type(&object, OverlappingType::Contained)
        .expect_err("contained lanes are not computed");
    assert_eq!(contained.kind(), ErrorKind::NotImplemented);

    let all = query
        .find_overlapping_lanes_in_by_type(&object, OverlappingType::All)
        .expect_err("all is not a lane filter");
    assert_eq!(all, ObjectError::InvalidOverlappingType(OverlappingType::All));
    assert_eq!(all.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn non_box_regions_cannot_drive_the_lane_search() {
    let network = network();
    let book = ManualObjectBook::new();
    let query = SimpleObjectQuery::new(&network, &book);
    let object = ObjectBuilder::new("stub")
        .region(Box::new(StubRegion::new(Vec3::new(5.0, 0.0, 0.0))))
        .build();

    let err = query
        .find_overlapping_lanes_in(&object)
        .expect_err("stub has no vertices");
    assert_eq!(err, ObjectError::UnsupportedRegion(StubRegion::SHAPE));
}

#[test]
fn route_picks_the_shortest_candidate() {
    let network = network();
    let book = ManualObjectBook::new();
    let query = SimpleObjectQuery::new(&network, &book);
    let origin = cube_at("origin", 5.0, 0.0);
    let target = cube_at("target", 25.0, 0.0);

    let route = query.route(&origin, &target).expect("connected");
    let lanes: Vec<&str> = route.ranges().iter().map(|r| r.lane_id().as_str()).collect();
    assert_eq!(lanes, ["a", "c"]);
    assert!((route.length() - 20.0).abs() < 1e-9);
}

#[test]
fn route_respects_the_length_limit() {
    let network = network();
    let book = ManualObjectBook::new();
    let origin = cube_at("origin", 5.0, 0.0);
    let target = cube_at("target", 25.0, 0.0);

    let short = SimpleObjectQuery::with_options(
        &network,
        &book,
        QueryOptions {
            max_route_length: 10.0,
        },
    );
    assert!(short.route(&origin, &target).is_none());
}

#[test]
fn unconnected_or_unresolvable_positions_have_no_route() {
    let network = network();
    let book = ManualObjectBook::new();
    let query = SimpleObjectQuery::new(&network, &book);
    let on_a = cube_at("origin", 5.0, 0.0);
    let on_b = cube_at("target", 5.0, 10.0);
    assert!(query.route(&on_a, &on_b).is_none());

    let empty = StraightRoadNetwork::new();
    let nowhere = SimpleObjectQuery::new(&empty, &book);
    assert!(nowhere.route(&on_a, &on_b).is_none());
}

#[test]
fn accessors_expose_borrowed_providers() {
    let network = network();
    let mut book = ManualObjectBook::new();
    book.add_object(cube_at("one", 0.0, 0.0))
        .expect("first insert");
    let query = SimpleObjectQuery::new(&network, &book);

    assert_eq!(query.object_book().objects().len(), 1);
    assert_eq!(query.road_network().lanes().len(), 4);
    assert_eq!(query.options(), QueryOptions::default());
    assert!(query.options().max_route_length.is_infinite());
}

#[test]
fn debug_output_shows_only_the_options() {
    let network = network();
    let book = ManualObjectBook::new();
    let query = SimpleObjectQuery::new(&network, &book);
    let rendered = format!("{query:?}");
    assert!(rendered.starts_with("SimpleObjectQuery {"));
    assert!(rendered.contains("max_route_length: inf"));
    assert!(rendered.ends_with(".. }"));
    assert!(!rendered.contains("lanes"));
}

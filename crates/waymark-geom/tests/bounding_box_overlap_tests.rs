// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Overlap classification between oriented bounding boxes.

use core::f64::consts::FRAC_PI_4;

use proptest::prelude::*;
use waymark_geom::{BoundingBox, BoundingRegion, OverlappingType, RollPitchYaw, Vec3};

fn make_box(position: [f64; 3], size: [f64; 3], rpy: [f64; 3]) -> BoundingBox {
    BoundingBox::new(
        Vec3::from(position),
        Vec3::from(size),
        RollPitchYaw::from(rpy),
        0.0,
    )
    .expect("valid box")
}

fn aligned(position: [f64; 3], size: [f64; 3]) -> BoundingBox {
    make_box(position, size, [0.0; 3])
}

fn overlaps(a: &BoundingBox, b: &BoundingBox) -> OverlappingType {
    a.overlaps(b).expect("box against box is supported")
}

#[test]
fn half_overlapping_cubes_intersect_both_ways() {
    let a = aligned([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    let b = aligned([1.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    assert_eq!(overlaps(&a, &b), OverlappingType::Intersected);
    assert_eq!(overlaps(&b, &a), OverlappingType::Intersected);
}

#[test]
fn small_box_inside_large_box_is_contained() {
    let a = aligned([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]);
    let b = aligned([1.0, 1.0, 1.0], [1.0, 1.0, 1.0]);
    assert_eq!(overlaps(&a, &b), OverlappingType::Contained);
    // Containment is directional.
    assert_eq!(overlaps(&b, &a), OverlappingType::Intersected);
}

#[test]
fn distant_boxes_are_disjoint() {
    let a = aligned([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    let b = aligned([100.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    assert_eq!(overlaps(&a, &b), OverlappingType::Disjoint);
    assert_eq!(overlaps(&b, &a), OverlappingType::Disjoint);
}

#[test]
fn touching_faces_intersect() {
    let a = aligned([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    let b = aligned([2.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    assert_eq!(overlaps(&a, &b), OverlappingType::Intersected);
}

#[test]
fn point_on_face_is_contained() {
    let a = aligned([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    assert!(a.contains(&Vec3::new(1.0, 0.0, 0.0)));
    assert!(a.contains(&Vec3::new(-1.0, -1.0, 1.0)));
    assert!(!a.contains(&Vec3::new(1.0 + 1e-9, 0.0, 0.0)));
}

#[test]
fn box_contains_itself() {
    let a = make_box([1.0, -2.0, 0.5], [3.0, 1.0, 2.0], [0.0, 0.0, 0.0]);
    assert_eq!(overlaps(&a, &a), OverlappingType::Contained);
}

#[test]
fn rotated_thin_box_is_separated_only_by_its_own_axes() {
    // A long, thin box yawed by 45°: its axis-aligned hull overlaps both
    // probes, but only the probe lying along its long axis touches it.
    let thin = make_box([0.0, 0.0, 0.0], [4.0, 0.2, 1.0], [0.0, 0.0, FRAC_PI_4]);
    let long_axis = thin.axes()[0];
    let across = thin.axes()[1];

    let along_probe = aligned(long_axis.scale(2.1).to_array(), [1.0, 1.0, 1.0]);
    let across_probe = aligned(across.scale(2.1).to_array(), [1.0, 1.0, 1.0]);

    assert_eq!(overlaps(&thin, &along_probe), OverlappingType::Intersected);
    assert_eq!(overlaps(&thin, &across_probe), OverlappingType::Disjoint);
    assert_eq!(overlaps(&across_probe, &thin), OverlappingType::Disjoint);
}

#[test]
fn edge_to_edge_separation_needs_cross_axes() {
    // A cube yawed 45° presents a vertical edge along +X; a cube pitched 45°
    // presents a horizontal edge along -X. No face normal separates them,
    // only the cross product of those two edges does.
    let a = make_box([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0, FRAC_PI_4]);
    let apart = make_box([1.5, 0.0, 0.0], [1.0, 1.0, 1.0], [0.0, FRAC_PI_4, 0.0]);
    let crossing = make_box([1.3, 0.0, 0.0], [1.0, 1.0, 1.0], [0.0, FRAC_PI_4, 0.0]);
    assert_eq!(overlaps(&a, &apart), OverlappingType::Disjoint);
    assert_eq!(overlaps(&apart, &a), OverlappingType::Disjoint);
    assert_eq!(overlaps(&a, &crossing), OverlappingType::Intersected);
    assert_eq!(overlaps(&crossing, &a), OverlappingType::Intersected);
}

fn coord() -> impl Strategy<Value = f64> {
    -20.0..20.0_f64
}

fn extent() -> impl Strategy<Value = f64> {
    0.1..8.0_f64
}

fn angle() -> impl Strategy<Value = f64> {
    -3.0..3.0_f64
}

prop_compose! {
    fn any_box()(
        p in [coord(), coord(), coord()],
        s in [extent(), extent(), extent()],
        r in [angle(), angle(), angle()],
    ) -> BoundingBox {
        make_box(p, s, r)
    }
}

prop_compose! {
    fn aligned_box()(
        p in [coord(), coord(), coord()],
        s in [extent(), extent(), extent()],
    ) -> BoundingBox {
        aligned(p, s)
    }
}

fn interval_gap(a: &BoundingBox, b: &BoundingBox, axis: usize) -> f64 {
    let ca = a.position().to_array()[axis];
    let cb = b.position().to_array()[axis];
    let ha = a.half_extents().to_array()[axis];
    let hb = b.half_extents().to_array()[axis];
    (ca - cb).abs() - (ha + hb)
}

proptest! {
    #[test]
    fn contained_implies_every_vertex_inside(a in any_box(), b in any_box()) {
        if overlaps(&a, &b) == OverlappingType::Contained {
            for v in b.vertices() {
                prop_assert!(a.contains(&v));
            }
        }
    }

    #[test]
    fn position_is_always_contained(a in any_box()) {
        prop_assert!(a.contains(&a.position()));
    }

    #[test]
    fn overlap_never_reports_all(a in any_box(), b in any_box()) {
        prop_assert_ne!(overlaps(&a, &b), OverlappingType::All);
    }

    #[test]
    fn sharing_the_centroid_means_overlap(a in any_box(), b in any_box()) {
        let moved = make_box(
            a.position().to_array(),
            b.box_size().to_array(),
            [b.orientation().roll(), b.orientation().pitch(), b.orientation().yaw()],
        );
        prop_assert_ne!(overlaps(&a, &moved), OverlappingType::Disjoint);
    }

    #[test]
    fn aligned_classification_is_symmetric(a in aligned_box(), b in aligned_box()) {
        let worst = (0..3).map(|axis| interval_gap(&a, &b, axis)).fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(worst.abs() > 1e-3);
        let ab = overlaps(&a, &b) == OverlappingType::Disjoint;
        let ba = overlaps(&b, &a) == OverlappingType::Disjoint;
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn aligned_classification_matches_interval_test(a in aligned_box(), b in aligned_box()) {
        let gaps = [interval_gap(&a, &b, 0), interval_gap(&a, &b, 1), interval_gap(&a, &b, 2)];
        let worst = gaps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Stay clear of the epsilon band around touching faces.
        prop_assume!(worst.abs() > 1e-3);
        let disjoint = overlaps(&a, &b) == OverlappingType::Disjoint;
        prop_assert_eq!(disjoint, worst > 0.0);
    }
}

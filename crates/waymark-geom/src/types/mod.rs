// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types: overlap outcomes, the bounding-region capability and
//! the oriented bounding box.
//!
//! Containment semantics:
//! - Point containment is inclusive on faces and widened by the region's
//!   own tolerance.
//! - Overlap classification describes the *other* region relative to
//!   `self`; `Contained` is therefore not symmetric.

#[doc = "Oriented bounding boxes (Inertial frame)."]
pub mod bounding_box;
#[doc = "Overlap outcome lattice with bitwise helpers."]
pub mod overlap;
#[doc = "Bounding-region capability and the closed set of concrete shapes."]
pub mod region;

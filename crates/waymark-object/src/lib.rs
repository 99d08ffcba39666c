// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! waymark-object: spatial objects placed in the Inertial frame, a registry
//! answering id/predicate/overlap lookups, and queries relating objects to
//! an external road network.
//!
//! Ownership runs one way: a book owns its objects, an object owns its
//! bounding region, and a query only borrows a book and a road network.
//! Nothing here locks; share a book across threads behind your own
//! synchronization.
#![forbid(unsafe_code)]

pub mod book;
pub mod description;
pub mod error;
pub mod object;
pub mod query;
pub mod road;

pub use book::{ManualObjectBook, ObjectBook};
pub use description::{BookDescription, ObjectDescription, RegionDescription};
pub use error::{ErrorKind, ObjectError};
pub use object::{Object, ObjectId, Properties};
pub use query::{ObjectQuery, QueryOptions, SimpleObjectQuery};
pub use road::{
    Lane, LaneId, LanePosition, LanePositionResult, LaneSRange, LaneSRoute, RBounds, RoadNetwork,
    RoadPosition, RoadPositionResult, SRange,
};
pub use waymark_geom as geom;

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ingestion records: plain values describing objects before they exist.
//!
//! A loader (YAML, JSON, a database row...) fills these records and hands them
//! to [`ManualObjectBook::from_descriptions`]. With the `serde` feature the
//! records deserialize from the canonical shape:
//!
//! ```text
//! objects:
//!   cone_1:
//!     bounding_region:
//!       type: box
//!       position: [1.0, 2.0, 0.0]
//!       rotation: [0.0, 0.0, 1.57]
//!       box_size: [0.3, 0.3, 0.5]
//!     properties:
//!       color: orange
//! ```

use std::collections::BTreeMap;

use waymark_geom::{BoundingBox, BoundingRegion, RollPitchYaw, Vec3};

use crate::book::{ManualObjectBook, ObjectBook};
use crate::error::ObjectError;
use crate::object::{Object, ObjectId, Properties};

/// Description of a bounding region, tagged by its `type`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum RegionDescription {
    /// Oriented box.
    Box {
        /// Centroid in the Inertial frame.
        position: Vec3,
        /// Roll, pitch and yaw in radians.
        rotation: RollPitchYaw,
        /// Full length, width and height.
        box_size: Vec3,
        /// Containment margin; zero when omitted.
        #[cfg_attr(feature = "serde", serde(default))]
        tolerance: f64,
    },
}

impl RegionDescription {
    /// Builds the described region.
    ///
    /// # Errors
    /// Geometry validation failures (negative tolerance, degenerate size).
    pub fn build(&self) -> Result<Box<dyn BoundingRegion>, ObjectError> {
        match *self {
            Self::Box {
                position,
                rotation,
                box_size,
                tolerance,
            } => {
                let region: Box<dyn BoundingRegion> =
                    Box::new(BoundingBox::new(position, box_size, rotation, tolerance)?);
                Ok(region)
            }
        }
    }
}

/// Description of one object.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectDescription {
    /// Region bounding the object.
    pub bounding_region: RegionDescription,
    /// Flat string properties.
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Properties,
}

impl ObjectDescription {
    /// Builds the object with the given id.
    ///
    /// # Errors
    /// Propagates [`RegionDescription::build`] failures.
    pub fn into_object(self, id: ObjectId) -> Result<Object, ObjectError> {
        let region = self.bounding_region.build()?;
        Ok(Object::new(id, self.properties, region))
    }
}

/// Description of a whole book, keyed by object id.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookDescription {
    /// Objects to create.
    pub objects: BTreeMap<ObjectId, ObjectDescription>,
}

impl BookDescription {
    /// Builds a populated book.
    ///
    /// # Errors
    /// See [`ManualObjectBook::from_descriptions`].
    pub fn into_book(self) -> Result<ManualObjectBook, ObjectError> {
        ManualObjectBook::from_descriptions(self.objects)
    }
}

impl ManualObjectBook {
    /// Builds a book from `(id, description)` pairs.
    ///
    /// Either every object is created or no book is returned.
    ///
    /// # Errors
    /// The first invalid region or duplicated id.
    pub fn from_descriptions<I>(descriptions: I) -> Result<Self, ObjectError>
    where
        I: IntoIterator<Item = (ObjectId, ObjectDescription)>,
    {
        let mut book = Self::new();
        for (id, description) in descriptions {
            book.add_object(description.into_object(id)?)?;
        }
        Ok(book)
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Builders for boxes and objects.
//!
//! # Example
//!
//! ```
//! use waymark_dry_tests::{BoxBuilder, ObjectBuilder};
//!
//! let cone = ObjectBuilder::new("cone_1")
//!     .property("color", "orange")
//!     .region(BoxBuilder::cube(0.5).at(3.0, 0.0, 0.0).build_region())
//!     .build();
//! assert_eq!(cone.property("color"), Some("orange"));
//! ```

use waymark_geom::{BoundingBox, BoundingRegion, GeomError, RollPitchYaw, Vec3};
use waymark_object::{Object, ObjectId, Properties};

/// Builder for [`BoundingBox`] fixtures.
///
/// Defaults to a unit cube at the origin, unrotated, without tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxBuilder {
    position: Vec3,
    box_size: Vec3,
    orientation: RollPitchYaw,
    tolerance: f64,
}

impl Default for BoxBuilder {
    fn default() -> Self {
        Self::cube(1.0)
    }
}

impl BoxBuilder {
    /// Unit cube at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cube with edge `side` at the origin.
    pub fn cube(side: f64) -> Self {
        Self {
            position: Vec3::ZERO,
            box_size: Vec3::new(side, side, side),
            orientation: RollPitchYaw::identity(),
            tolerance: 0.0,
        }
    }

    /// Moves the centroid.
    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Sets the full length, width and height.
    pub fn size(mut self, x: f64, y: f64, z: f64) -> Self {
        self.box_size = Vec3::new(x, y, z);
        self
    }

    /// Sets roll, pitch and yaw in radians.
    pub fn rotated(mut self, roll: f64, pitch: f64, yaw: f64) -> Self {
        self.orientation = RollPitchYaw::new(roll, pitch, yaw);
        self
    }

    /// Sets the containment tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builds the box, reporting invalid parameters.
    pub fn try_build(self) -> Result<BoundingBox, GeomError> {
        BoundingBox::new(
            self.position,
            self.box_size,
            self.orientation,
            self.tolerance,
        )
    }

    /// Builds the box.
    ///
    /// # Panics
    /// If the parameters are invalid; fixtures are expected to be valid.
    #[allow(clippy::expect_used)]
    pub fn build(self) -> BoundingBox {
        self.try_build().expect("box fixture parameters should be valid")
    }

    /// Builds the box as an owned region.
    pub fn build_region(self) -> Box<dyn BoundingRegion> {
        Box::new(self.build())
    }
}

/// Builder for [`Object`] fixtures.
#[derive(Debug)]
pub struct ObjectBuilder {
    id: ObjectId,
    properties: Properties,
    region: Option<Box<dyn BoundingRegion>>,
}

impl ObjectBuilder {
    /// Starts an object with `id`, no properties and a unit cube at the
    /// origin.
    pub fn new(id: &str) -> Self {
        Self {
            id: ObjectId::from(id),
            properties: Properties::new(),
            region: None,
        }
    }

    /// Adds a property.
    pub fn property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Sets the bounding region.
    pub fn region(mut self, region: Box<dyn BoundingRegion>) -> Self {
        self.region = Some(region);
        self
    }

    /// Builds the object.
    pub fn build(self) -> Object {
        let region = self
            .region
            .unwrap_or_else(|| BoxBuilder::default().build_region());
        Object::new(self.id, self.properties, region)
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Objects: identified, immutable spatial entities owning one bounding region.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use waymark_geom::{BoundingRegion, Vec3};

/// Opaque, string-backed object identifier.
///
/// Uniqueness is enforced by the book holding the object, not by the id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObjectId(String);

impl ObjectId {
    /// Wraps a string as an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ObjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ObjectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Free-form string properties attached to an object.
pub type Properties = BTreeMap<String, String>;

/// Spatial entity: an id, free-form properties and exactly one bounding
/// region it owns.
///
/// Objects are created fully formed and never mutated; the region is moved
/// in at construction and is only ever lent out afterwards.
#[derive(Debug)]
pub struct Object {
    id: ObjectId,
    properties: Properties,
    region: Box<dyn BoundingRegion>,
}

impl Object {
    /// Builds an object, taking ownership of `region`.
    pub fn new(id: ObjectId, properties: Properties, region: Box<dyn BoundingRegion>) -> Self {
        Self {
            id,
            properties,
            region,
        }
    }

    /// Object id.
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    /// Region bounding the object.
    pub fn bounding_region(&self) -> &dyn BoundingRegion {
        self.region.as_ref()
    }

    /// Reference position of the object, taken from its bounding region.
    pub fn position(&self) -> Vec3 {
        self.region.position()
    }

    /// Value of property `key`, if present.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// All properties.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

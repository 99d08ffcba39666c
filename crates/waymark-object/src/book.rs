// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Object registries.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::debug;
use waymark_geom::{BoundingRegion, OverlappingType};

use crate::error::ObjectError;
use crate::object::{Object, ObjectId};

/// Registry owning a set of uniquely identified objects.
///
/// Iteration order of every query is the implementation's internal order and
/// carries no meaning. Implementations provide no internal locking; callers
/// that share a book across threads must serialize mutations themselves.
pub trait ObjectBook {
    /// Snapshot of every held object keyed by id.
    fn objects(&self) -> FxHashMap<&ObjectId, &Object>;

    /// Object with `id`, or `None` when absent.
    fn find_by_id(&self, id: &ObjectId) -> Option<&Object>;

    /// Every object for which `predicate` returns `true`.
    fn find_by_predicate(&self, predicate: &dyn Fn(&Object) -> bool) -> Vec<&Object>;

    /// Every object whose region classifies `region` as `overlapping_type`.
    ///
    /// The test is `object.bounding_region().overlaps(region)` matched with
    /// [`OverlappingType::matches`]: `All` selects any non-disjoint object, a
    /// single flag selects exactly that outcome and `Disjoint` selects every
    /// object.
    ///
    /// # Errors
    /// Propagates the first classification failure (e.g. an unsupported
    /// region shape).
    fn find_overlapping_in(
        &self,
        region: &dyn BoundingRegion,
        overlapping_type: OverlappingType,
    ) -> Result<Vec<&Object>, ObjectError>;

    /// Takes ownership of `object`.
    ///
    /// # Errors
    /// [`ObjectError::DuplicateId`] if the id is already present; the book is
    /// left unchanged.
    fn add_object(&mut self, object: Object) -> Result<(), ObjectError>;

    /// Removes the object with `id` and hands it back.
    ///
    /// # Errors
    /// [`ObjectError::UnknownId`] if no such object is held.
    fn remove_object(&mut self, id: &ObjectId) -> Result<Object, ObjectError>;
}

/// [`ObjectBook`] backed by an id-keyed table.
///
/// Every query is a linear scan; no spatial index is maintained, which suits
/// the small object counts this book is meant for.
#[derive(Debug, Default)]
pub struct ManualObjectBook {
    objects: FxHashMap<ObjectId, Object>,
}

impl ManualObjectBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of held objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the book holds no object.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates over the held objects in internal order.
    pub fn iter(&self) -> impl Iterator<Item = &Object> + '_ {
        self.objects.values()
    }
}

impl ObjectBook for ManualObjectBook {
    fn objects(&self) -> FxHashMap<&ObjectId, &Object> {
        self.objects.iter().collect()
    }

    fn find_by_id(&self, id: &ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    fn find_by_predicate(&self, predicate: &dyn Fn(&Object) -> bool) -> Vec<&Object> {
        self.objects.values().filter(|o| predicate(o)).collect()
    }

    fn find_overlapping_in(
        &self,
        region: &dyn BoundingRegion,
        overlapping_type: OverlappingType,
    ) -> Result<Vec<&Object>, ObjectError> {
        let mut found = Vec::new();
        for object in self.objects.values() {
            if object
                .bounding_region()
                .overlaps(region)?
                .matches(overlapping_type)
            {
                found.push(object);
            }
        }
        Ok(found)
    }

    fn add_object(&mut self, object: Object) -> Result<(), ObjectError> {
        match self.objects.entry(object.id().clone()) {
            Entry::Occupied(slot) => Err(ObjectError::DuplicateId(slot.key().clone())),
            Entry::Vacant(slot) => {
                debug!(id = %slot.key(), "object added");
                slot.insert(object);
                Ok(())
            }
        }
    }

    fn remove_object(&mut self, id: &ObjectId) -> Result<Object, ObjectError> {
        let object = self
            .objects
            .remove(id)
            .ok_or_else(|| ObjectError::UnknownId(id.clone()))?;
        debug!(%id, "object removed");
        Ok(object)
    }
}

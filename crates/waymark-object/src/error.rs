// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by the object book and the object queries.

use thiserror::Error;
use waymark_geom::{GeomError, OverlappingType};

use crate::object::ObjectId;

/// Coarse classification of an [`ObjectError`].
///
/// Lets callers tell misuse apart from missing entries and from features
/// that do not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A precondition on the arguments was violated.
    InvalidArgument,
    /// The referenced entry does not exist.
    NotFound,
    /// The requested behavior is not implemented.
    NotImplemented,
}

/// Error type for object book mutations and object queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjectError {
    /// An object with this id is already held by the book.
    #[error("object `{0}` already exists")]
    DuplicateId(ObjectId),
    /// No object with this id is held by the book.
    #[error("object `{0}` not found")]
    UnknownId(ObjectId),
    /// The operation needs a bounding region shape it cannot get.
    #[error("bounding region `{0}` is not supported by this operation")]
    UnsupportedRegion(&'static str),
    /// The overlapping type is not a valid filter for this operation.
    #[error("overlapping type `{0}` is not valid here")]
    InvalidOverlappingType(OverlappingType),
    /// Known gap in functionality.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    /// Geometry construction or classification failed.
    #[error(transparent)]
    Geom(#[from] GeomError),
}

impl ObjectError {
    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownId(_) => ErrorKind::NotFound,
            Self::NotImplemented(_) => ErrorKind::NotImplemented,
            Self::DuplicateId(_)
            | Self::UnsupportedRegion(_)
            | Self::InvalidOverlappingType(_)
            | Self::Geom(_) => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_partition_the_variants() {
        assert_eq!(
            ObjectError::UnknownId(ObjectId::from("a")).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ObjectError::DuplicateId(ObjectId::from("a")).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ObjectError::NotImplemented("x").kind(),
            ErrorKind::NotImplemented
        );
        assert_eq!(
            ObjectError::from(GeomError::NegativeTolerance(-1.0)).kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn messages_name_the_object() {
        let msg = ObjectError::DuplicateId(ObjectId::from("cone_7")).to_string();
        assert_eq!(msg, "object `cone_7` already exists");
    }
}

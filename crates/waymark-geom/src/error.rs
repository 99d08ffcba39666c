// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Error returned by bounding-volume construction and overlap queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Containment tolerance must be zero or positive.
    #[error("tolerance must be >= 0, got {0}")]
    NegativeTolerance(f64),
    /// Every box dimension must be strictly positive.
    #[error("box size components must be > 0, got [{x}, {y}, {z}]")]
    InvalidBoxSize {
        /// Length along the local X axis.
        x: f64,
        /// Width along the local Y axis.
        y: f64,
        /// Height along the local Z axis.
        z: f64,
    },
    /// The region implementation cannot classify against this concrete shape.
    #[error("unsupported bounding region `{other}` for `{region}`")]
    UnsupportedRegion {
        /// Shape performing the query.
        region: &'static str,
        /// Shape passed as the other operand.
        other: &'static str,
    },
}

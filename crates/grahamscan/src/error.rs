use thiserror::Error;

use crate::geom2::Point;

/// Errors surfaced by point sampling, anchor selection and the scan engine.
///
/// Degenerate inputs (one or two points, all points collinear) are not
/// errors; they complete with a chain of one or two points.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HullError {
    #[error("point set is empty")]
    EmptyInput,

    #[error("step() called after the scan completed")]
    TerminalState,

    #[error("coordinate of {0} exceeds the exact-arithmetic limit")]
    CoordinateOutOfRange(Point),

    #[error("requested {requested} distinct points but the sampling rectangle holds only {available}")]
    TooManyPoints { requested: usize, available: u128 },
}

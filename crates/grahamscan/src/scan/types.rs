//! Run state and the per-step snapshot handed to drivers.

use serde::Serialize;

use crate::geom2::Point;

/// Engine lifecycle. `Completed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RunState {
    NotStarted,
    Running,
    Completed,
}

/// Immutable view of the engine after a `step()`.
///
/// Renderers draw from this alone: the chain as an open polyline (closed via
/// `closing_edge` once completed), `highlighted` as the next candidate, and
/// `remaining` as the unprocessed points in scan order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub state: RunState,
    /// Number of `step()` calls applied so far.
    pub step: usize,
    pub anchor: Option<Point>,
    /// Chain bottom-to-top: `hull[0]` is the anchor, the last entry the newest.
    pub hull: Vec<Point>,
    pub remaining: Vec<Point>,
    pub highlighted: Option<Point>,
    /// Chain points discarded while placing the latest candidate, in pop order.
    pub popped: Vec<Point>,
}

impl Snapshot {
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state == RunState::Completed
    }

    /// Edge from the newest chain point back to the anchor, once completed.
    pub fn closing_edge(&self) -> Option<(Point, Point)> {
        match (self.state, self.hull.first(), self.hull.last()) {
            (RunState::Completed, Some(&first), Some(&last)) if self.hull.len() >= 2 => {
                Some((last, first))
            }
            _ => None,
        }
    }
}

//! Graham scan as an explicit, externally driven state machine.
//!
//! Purpose
//! - Select the anchor (`pivot`), linearize the remaining points by polar
//!   angle, and grow a counterclockwise chain one candidate per `step()`,
//!   exposing every intermediate chain as an immutable `Snapshot`.
//!
//! Design
//! - The engine owns all mutable state of one run; nothing is shared between
//!   runs and nothing is drawn or slept on here. Drivers (render loops, the
//!   CLI, tests) decide pacing and consume snapshots.
//! - Completion is detected lazily: the step after the queue empties flips
//!   the state to `Completed`.
//!
//! Code cross-refs: `geom2::{cross, polar_cmp, ScanCfg}`

mod engine;
mod pivot;
mod types;

pub use engine::{convex_hull, drive, HullEngine, Steps};
pub use pivot::select_anchor;
pub use types::{RunState, Snapshot};

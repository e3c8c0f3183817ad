//! Integer 2D geometry for the scan.
//!
//! Purpose
//! - Provide the `Point` type, exact orientation predicates, the polar order
//!   around an anchor, and the convexity/enclosure checks used to validate a
//!   finished hull.
//! - Keep every predicate exact: coordinates are `i64` within `±COORD_LIMIT`,
//!   products are `i128`.
//!   Floats appear only in `polar_angle` and `Point::offset_from`, for display.
//!
//! Code cross-refs: `scan::{select_anchor, HullEngine}`

pub mod rand;
mod types;
mod util;

pub use types::{Collinear, Point, ScanCfg};
pub use util::{
    cross, encloses, is_convex_ccw, polar_angle, polar_cmp, squared_distance, twice_area, Turn,
    COORD_LIMIT,
};

#[cfg(test)]
mod tests;

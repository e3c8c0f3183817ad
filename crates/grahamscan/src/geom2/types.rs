//! Basic 2D types for the scan.
//!
//! - `Point`: immutable integer lattice point, compared and hashed by value.
//! - `Collinear`, `ScanCfg`: how the backtracking loop treats zero turns.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::util::Turn;

/// Integer point `(x, y)`.
///
/// Ordered by `y`, then `x`: the minimum of a set is its scan anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Offset `self - origin` as a float vector (for angles and display only).
    #[inline]
    pub fn offset_from(&self, origin: Point) -> Vector2<f64> {
        Vector2::new((self.x - origin.x) as f64, (self.y - origin.y) as f64)
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i64, i64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Treatment of a candidate that is collinear with the top two chain points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collinear {
    /// Pop on any non-left turn (cross <= 0). The chain stays strictly convex.
    #[default]
    Drop,
    /// Pop only on right turns (cross < 0). Points on hull edges are retained,
    /// except on the closing edge back to the anchor: those share the last
    /// polar angle and are displaced by the farther point visited after them.
    Keep,
}

/// Scan configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanCfg {
    pub collinear: Collinear,
}

impl ScanCfg {
    /// Whether `turn` (second-from-top, top, candidate) discards the chain top.
    #[inline]
    pub fn pops(&self, turn: Turn) -> bool {
        match (turn, self.collinear) {
            (Turn::Right, _) | (Turn::Collinear, Collinear::Drop) => true,
            (Turn::Left, _) | (Turn::Collinear, Collinear::Keep) => false,
        }
    }
}

//! Random point sets in 2D (uniform on an integer rectangle + replay tokens).
//!
//! Purpose
//! - Provide the input generator that drivers and tests feed into the scan.
//!   The core accepts any finite set; this is just a convenient, reproducible
//!   source of one.
//!
//! Model
//! - Draw `x` and `y` independently and uniformly from half-open ranges,
//!   rejecting duplicates until `count` distinct points exist.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Defaults
//! - 15 points on a 750x600 canvas with a margin of 1/20 of each side, i.e.
//!   `x ∈ [37, 712)`, `y ∈ [30, 570)`.

use std::collections::BTreeSet;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;
use crate::error::HullError;

/// Half-open sampling rectangle `xs × ys`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bounds2 {
    pub xs: Range<i64>,
    pub ys: Range<i64>,
}

impl Bounds2 {
    /// Inner rectangle of a `width × height` canvas with a 1/20 margin on the
    /// low side and a span of 9/10 of each side.
    pub fn canvas(width: i64, height: i64) -> Self {
        let x0 = width / 20;
        let y0 = height / 20;
        Self {
            xs: x0..x0 + (width - width / 10),
            ys: y0..y0 + (height - height / 10),
        }
    }

    /// Number of distinct lattice points available.
    pub fn capacity(&self) -> u128 {
        let w = (self.xs.end as i128 - self.xs.start as i128).max(0) as u128;
        let h = (self.ys.end as i128 - self.ys.start as i128).max(0) as u128;
        w * h
    }
}

/// Sampler configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleCfg {
    pub count: usize,
    pub bounds: Bounds2,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 15,
            bounds: Bounds2::canvas(750, 600),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` distinct points uniformly from `cfg.bounds`.
///
/// Returns the points in anchor order (`y`, then `x`), so iteration order
/// never depends on hashing.
///
/// Errors
/// - `HullError::EmptyInput` if `count == 0` or the rectangle is empty.
/// - `HullError::TooManyPoints` if the rectangle holds fewer than `count`
///   lattice points.
pub fn sample_points(cfg: &SampleCfg, tok: ReplayToken) -> Result<Vec<Point>, HullError> {
    if cfg.count == 0 || cfg.bounds.capacity() == 0 {
        return Err(HullError::EmptyInput);
    }
    if (cfg.count as u128) > cfg.bounds.capacity() {
        return Err(HullError::TooManyPoints {
            requested: cfg.count,
            available: cfg.bounds.capacity(),
        });
    }
    let mut rng = tok.to_std_rng();
    let mut out = BTreeSet::new();
    while out.len() < cfg.count {
        let x = rng.gen_range(cfg.bounds.xs.clone());
        let y = rng.gen_range(cfg.bounds.ys.clone());
        out.insert(Point::new(x, y));
    }
    Ok(out.into_iter().collect())
}

use std::cmp::Ordering;

use super::types::Point;

/// Largest coordinate magnitude (exclusive) for which `cross` and
/// `squared_distance` cannot overflow: differences stay below 2^63, products
/// below 2^126.
pub const COORD_LIMIT: i64 = 1 << 62;

/// Twice the signed area of triangle `(a, b, c)`:
/// `(b.x−a.x)(c.y−a.y) − (b.y−a.y)(c.x−a.x)`.
///
/// Positive for a counterclockwise (left) turn `a→b→c`, negative for a
/// clockwise (right) turn, zero if collinear. Evaluated in `i128`; exact for
/// coordinates within `±COORD_LIMIT`.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> i128 {
    let abx = b.x as i128 - a.x as i128;
    let aby = b.y as i128 - a.y as i128;
    let acx = c.x as i128 - a.x as i128;
    let acy = c.y as i128 - a.y as i128;
    abx * acy - aby * acx
}

/// Turn direction of three ordered points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Collinear,
    Right,
}

impl Turn {
    #[inline]
    pub fn of(a: Point, b: Point, c: Point) -> Self {
        match cross(a, b, c).cmp(&0) {
            Ordering::Greater => Turn::Left,
            Ordering::Equal => Turn::Collinear,
            Ordering::Less => Turn::Right,
        }
    }
}

#[inline]
pub fn squared_distance(a: Point, b: Point) -> i128 {
    let dx = b.x as i128 - a.x as i128;
    let dy = b.y as i128 - a.y as i128;
    dx * dx + dy * dy
}

/// `atan2(p.y − anchor.y, p.x − anchor.x)` in radians.
///
/// For display only; ordering uses [`polar_cmp`], which agrees with this on
/// the half-plane above the anchor but never rounds.
#[inline]
pub fn polar_angle(anchor: Point, p: Point) -> f64 {
    let v = p.offset_from(anchor);
    v.y.atan2(v.x)
}

/// Comparator: ascending polar angle around `anchor`, ties by ascending distance.
///
/// Pre: every compared point lies in the half-open upper half-plane of
/// `anchor` (angle in `[0, π)`), which holds when `anchor` is the lowest-then-
/// leftmost point of the set. On that domain the cross-product sign is a
/// strict weak order equal to the atan2 order.
pub fn polar_cmp(anchor: Point) -> impl Fn(&Point, &Point) -> Ordering {
    move |a, b| match cross(anchor, *a, *b).cmp(&0) {
        // b is counterclockwise of a → a has the smaller angle.
        Ordering::Greater => Ordering::Less,
        Ordering::Less => Ordering::Greater,
        Ordering::Equal => squared_distance(anchor, *a).cmp(&squared_distance(anchor, *b)),
    }
}

/// Twice the signed area of the closed polygon `chain` (shoelace).
///
/// Returns `None` for fewer than 3 vertices.
pub fn twice_area(chain: &[Point]) -> Option<i128> {
    if chain.len() < 3 {
        return None;
    }
    let origin = chain[0];
    let mut acc: i128 = 0;
    for k in 1..chain.len() - 1 {
        acc += cross(origin, chain[k], chain[k + 1]);
    }
    Some(acc)
}

/// Every consecutive triple of the closed chain (wraparound included) turns
/// non-clockwise. Chains of fewer than 3 points are trivially convex.
pub fn is_convex_ccw(chain: &[Point]) -> bool {
    let n = chain.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|k| cross(chain[k], chain[(k + 1) % n], chain[(k + 2) % n]) >= 0)
}

/// `p` lies on or inside the closed CCW chain.
///
/// Degenerate chains: a single point encloses only itself; a chain whose
/// points all lie on one line encloses the segment between its extremes.
pub fn encloses(chain: &[Point], p: Point) -> bool {
    let (Some(&lo), Some(&hi)) = (
        chain.iter().min_by_key(|q| (q.x, q.y)),
        chain.iter().max_by_key(|q| (q.x, q.y)),
    ) else {
        return false;
    };
    if chain.iter().all(|&q| cross(lo, hi, q) == 0) {
        return on_segment(lo, hi, p);
    }
    let n = chain.len();
    (0..n).all(|k| cross(chain[k], chain[(k + 1) % n], p) >= 0)
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    cross(a, b, p) == 0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

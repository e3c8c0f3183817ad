use super::*;

fn p(x: i64, y: i64) -> Point {
    Point::new(x, y)
}

#[test]
fn cross_sign_and_turns() {
    assert_eq!(cross(p(0, 0), p(4, 0), p(4, 4)), 16);
    assert_eq!(cross(p(0, 0), p(4, 4), p(4, 0)), -16);
    assert_eq!(cross(p(0, 0), p(1, 1), p(2, 2)), 0);
    assert_eq!(Turn::of(p(0, 0), p(4, 0), p(4, 4)), Turn::Left);
    assert_eq!(Turn::of(p(0, 0), p(4, 4), p(4, 0)), Turn::Right);
    assert_eq!(Turn::of(p(0, 0), p(1, 1), p(2, 2)), Turn::Collinear);
}

#[test]
fn cross_is_exact_near_coord_limit() {
    let m = COORD_LIMIT - 1;
    let a = p(-m, -m);
    let b = p(m, -m);
    let c = p(m, m);
    // (2m)^2 is far outside f64's exact integer range.
    let span = 2 * m as i128;
    assert_eq!(cross(a, b, c), span * span);
    assert_eq!(Turn::of(a, c, b), Turn::Right);
    // One unit off a huge diagonal is still detected.
    assert_eq!(cross(p(0, 0), p(m, m - 1), p(m - 1, m - 2)), -1);
}

#[test]
fn point_order_puts_anchor_first() {
    let mut pts = vec![p(3, 1), p(0, 2), p(-1, 1), p(5, 0), p(2, 0)];
    pts.sort();
    assert_eq!(pts[0], p(2, 0));
    assert_eq!(pts, vec![p(2, 0), p(5, 0), p(-1, 1), p(3, 1), p(0, 2)]);
    assert_eq!(p(-3, 7).to_string(), "(-3, 7)");
    assert_eq!(Point::from((4, -2)), p(4, -2));
    let v = p(3, 4).offset_from(p(1, 1));
    assert!((v.x - 2.0).abs() < 1e-12 && (v.y - 3.0).abs() < 1e-12);
}

#[test]
fn polar_order_angle_then_distance() {
    let anchor = p(0, 0);
    let mut pts = vec![p(0, 4), p(4, 4), p(2, 2), p(4, 0), p(-3, 1), p(1, 0)];
    pts.sort_by(polar_cmp(anchor));
    assert_eq!(pts, vec![p(1, 0), p(4, 0), p(2, 2), p(4, 4), p(0, 4), p(-3, 1)]);
    // Agrees with atan2 on the upper half-plane.
    let angles: Vec<f64> = pts.iter().map(|q| polar_angle(anchor, *q)).collect();
    assert!(angles.windows(2).all(|w| w[0] <= w[1]));
    assert!((polar_angle(anchor, p(0, 4)) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn convexity_and_area() {
    let square = [p(0, 0), p(4, 0), p(4, 4), p(0, 4)];
    assert!(is_convex_ccw(&square));
    assert_eq!(twice_area(&square), Some(32));
    let clockwise = [p(0, 0), p(0, 4), p(4, 4), p(4, 0)];
    assert!(!is_convex_ccw(&clockwise));
    assert_eq!(twice_area(&clockwise), Some(-32));
    let dented = [p(0, 0), p(4, 0), p(2, 1), p(4, 4), p(0, 4)];
    assert!(!is_convex_ccw(&dented));
    assert!(is_convex_ccw(&[p(0, 0), p(2, 2)]));
    assert_eq!(twice_area(&[p(0, 0), p(2, 2)]), None);
}

#[test]
fn enclosure_including_degenerate_chains() {
    let square = [p(0, 0), p(4, 0), p(4, 4), p(0, 4)];
    assert!(encloses(&square, p(2, 2)));
    assert!(encloses(&square, p(4, 2)));
    assert!(encloses(&square, p(0, 0)));
    assert!(!encloses(&square, p(5, 2)));
    let segment = [p(0, 0), p(2, 2)];
    assert!(encloses(&segment, p(1, 1)));
    assert!(!encloses(&segment, p(3, 3)));
    assert!(!encloses(&segment, p(1, 0)));
    assert!(encloses(&[p(5, 5)], p(5, 5)));
    assert!(!encloses(&[p(5, 5)], p(5, 6)));
    assert!(!encloses(&[], p(0, 0)));
}

#[test]
fn collinear_chain_encloses_only_its_segment() {
    let chain = [p(0, 0), p(1, 1), p(2, 2)];
    assert!(encloses(&chain, p(1, 1)));
    assert!(encloses(&chain, p(2, 2)));
    assert!(!encloses(&chain, p(5, 5)));
    assert!(!encloses(&chain, p(-7, -7)));
    assert!(!encloses(&chain, p(1, 0)));
    // Vertical line: extremes ordered by x then y.
    let vertical = [p(3, -2), p(3, 0), p(3, 4)];
    assert!(encloses(&vertical, p(3, 1)));
    assert!(!encloses(&vertical, p(3, 5)));
}

#[test]
fn scan_cfg_pop_rule() {
    let drop = ScanCfg::default();
    assert_eq!(drop.collinear, Collinear::Drop);
    assert!(drop.pops(Turn::Collinear) && drop.pops(Turn::Right) && !drop.pops(Turn::Left));
    let keep = ScanCfg {
        collinear: Collinear::Keep,
    };
    assert!(!keep.pops(Turn::Collinear) && keep.pops(Turn::Right) && !keep.pops(Turn::Left));
}

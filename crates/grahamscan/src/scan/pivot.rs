//! Anchor selection: the lowest point, leftmost among ties.

use crate::error::HullError;
use crate::geom2::Point;

/// Pre: none. Post: the point with minimum `y`, ties broken by minimum `x`.
///
/// Pure and linear in the number of points. Fails with
/// `HullError::EmptyInput` if `points` yields nothing.
pub fn select_anchor<'a, I>(points: I) -> Result<Point, HullError>
where
    I: IntoIterator<Item = &'a Point>,
{
    points
        .into_iter()
        .copied()
        .min_by_key(|p| (p.y, p.x))
        .ok_or(HullError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_then_leftmost() {
        let pts = [
            Point::new(3, 1),
            Point::new(7, 0),
            Point::new(-2, 5),
            Point::new(4, 0),
        ];
        assert_eq!(select_anchor(&pts), Ok(Point::new(4, 0)));
    }

    #[test]
    fn independent_of_iteration_order() {
        let mut pts = vec![
            Point::new(0, 4),
            Point::new(4, 4),
            Point::new(0, 0),
            Point::new(4, 0),
        ];
        let a = select_anchor(&pts).unwrap();
        pts.reverse();
        assert_eq!(select_anchor(&pts).unwrap(), a);
        assert_eq!(a, Point::new(0, 0));
    }

    #[test]
    fn single_and_empty() {
        assert_eq!(select_anchor(&[Point::new(5, 5)]), Ok(Point::new(5, 5)));
        let empty: [Point; 0] = [];
        assert_eq!(select_anchor(&empty), Err(HullError::EmptyInput));
    }
}

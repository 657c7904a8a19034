//! Points in the plane and closed-tour length.
//!
//! [`tour_length`] is the fitness function of the solver and by far its
//! hottest path: the driver calls it once per individual per generation.

/// A destination in the plane.
///
/// Points compare by value. Two destinations may share coordinates; they
/// are still separate stops of the tour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Bit-exact key for hashing.
    pub(crate) fn key(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A visiting order over the destination set.
pub type Tour = Vec<Point>;

/// Total length of the closed tour through `tour`.
///
/// Sums the distance between consecutive points and the distance from the
/// last point back to the first. Tours with fewer than two points have
/// length `0.0`.
///
/// # Complexity
/// O(n)
pub fn tour_length(tour: &[Point]) -> f64 {
    match (tour.first(), tour.last()) {
        (Some(first), Some(last)) if tour.len() >= 2 => {
            let open: f64 = tour.windows(2).map(|w| w[0].distance(&w[1])).sum();
            open + last.distance(first)
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_perimeter() {
        assert!((tour_length(&square()) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_crossed_square_is_longer() {
        let s = square();
        let crossed = vec![s[0], s[2], s[1], s[3]];
        let expected = 20.0 + 2.0 * 200f64.sqrt();
        assert!((tour_length(&crossed) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(tour_length(&[]), 0.0);
        assert_eq!(tour_length(&[Point::new(5.0, 5.0)]), 0.0);
    }

    #[test]
    fn test_two_points_goes_there_and_back() {
        let t = [Point::new(0.0, 0.0), Point::new(0.0, 7.0)];
        assert!((tour_length(&t) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_and_reversal_invariant() {
        let t = vec![
            Point::new(1.0, 2.0),
            Point::new(8.0, 3.0),
            Point::new(5.0, 9.0),
            Point::new(0.0, 4.0),
            Point::new(6.0, 6.0),
        ];
        let base = tour_length(&t);
        for k in 0..t.len() {
            let mut rotated = t.clone();
            rotated.rotate_left(k);
            assert!((tour_length(&rotated) - base).abs() < 1e-9);
        }
        let mut reversed = t.clone();
        reversed.reverse();
        assert!((tour_length(&reversed) - base).abs() < 1e-9);
    }

    #[test]
    fn test_from_tuple() {
        let p: Point = (1.5, -2.0).into();
        assert_eq!(p, Point::new(1.5, -2.0));
    }
}

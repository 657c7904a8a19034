//! Destination and initial population generation.

use crate::error::{Result, TspError};
use crate::geometry::{Point, Tour};
use rand::seq::SliceRandom;
use rand::Rng;

/// The set of candidate tours evolved by the driver.
pub type Population = Vec<Tour>;

/// Draws `count` random destinations.
///
/// Each coordinate is an integer sampled uniformly from `[min, max)` and
/// stored as `f64`. Duplicate points are allowed.
///
/// # Errors
/// [`TspError::InvalidArgument`] if `min >= max`.
pub fn generate_destinations<R: Rng>(
    count: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Vec<Point>> {
    if min >= max {
        return Err(TspError::invalid(format!(
            "coordinate range is empty: [{min}, {max})"
        )));
    }
    Ok((0..count)
        .map(|_| {
            let x = rng.random_range(min..max);
            let y = rng.random_range(min..max);
            Point::new(x as f64, y as f64)
        })
        .collect())
}

/// Builds `size` independent uniform shuffles of `destinations`.
pub fn generate_population<R: Rng>(destinations: &[Point], size: usize, rng: &mut R) -> Population {
    (0..size)
        .map(|_| {
            let mut tour = destinations.to_vec();
            tour.shuffle(rng);
            tour
        })
        .collect()
}

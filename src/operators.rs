//! Permutation-preserving genetic operators over tours.
//!
//! # Crossover
//!
//! [`crossover`] is a partial-order crossover: a contiguous window of the
//! first parent is kept in place and the remaining positions are filled
//! with the second parent's points that are not in the window. The fill
//! consumes the filtered donor list from its **end**, so the first empty
//! slot receives the last eligible donor point. This order is part of the
//! contract: seeded runs depend on it.
//!
//! # Mutation
//!
//! [`mutate`] swaps two distinct positions of a copy of the tour.

use crate::error::{Result, TspError};
use crate::geometry::{Point, Tour};
use rand::Rng;
use std::collections::HashMap;

/// One position of a crossover window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    /// Position inherited from the first parent.
    Occupied(Point),
    /// Position to be filled from the second parent.
    Empty,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

// ============================================================================
// Window extraction
// ============================================================================

/// Extracts a random contiguous window of `tour`.
///
/// The returned vector has the same length as `tour`. Positions inside the
/// window hold [`Slot::Occupied`] with the original point, all others hold
/// [`Slot::Empty`]. The start index is uniform over every position where
/// the window fits.
///
/// # Errors
/// [`TspError::InvalidArgument`] if `window_size >= tour.len()`.
pub fn random_window<R: Rng>(tour: &[Point], window_size: usize, rng: &mut R) -> Result<Vec<Slot>> {
    let n = tour.len();
    if window_size >= n {
        return Err(TspError::invalid(format!(
            "window size {window_size} must be smaller than tour length {n}"
        )));
    }
    let start = rng.random_range(0..=n - window_size);
    let end = start + window_size;

    Ok(tour
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            if (start..end).contains(&i) {
                Slot::Occupied(p)
            } else {
                Slot::Empty
            }
        })
        .collect())
}

// ============================================================================
// Crossover
// ============================================================================

/// Partial-order crossover of two tours.
///
/// Keeps a random window of `window_size` points from `parent1` at their
/// positions and fills the rest from `parent2` as described in
/// [`fill_window`].
///
/// # Errors
/// - [`TspError::InvalidArgument`] if `window_size >= parent1.len()` or the
///   parents are not permutations of the same points.
/// - [`TspError::ExhaustedInput`] if `parent2` runs out of filler points.
pub fn crossover<R: Rng>(
    parent1: &[Point],
    parent2: &[Point],
    window_size: usize,
    rng: &mut R,
) -> Result<Tour> {
    let window = random_window(parent1, window_size, rng)?;
    fill_window(&window, parent2)
}

/// Fills the empty slots of `window` from `donor`.
///
/// The donor's points minus those already in the window (as a multiset,
/// so repeated coordinates are matched one for one) form the filler list,
/// in donor order. Scanning the window left to right, each empty slot takes
/// the filler list's last remaining element.
///
/// # Errors
/// - [`TspError::ExhaustedInput`] if fewer fillers remain than empty slots.
/// - [`TspError::InvalidArgument`] if fillers are left over after every slot
///   is filled.
pub fn fill_window(window: &[Slot], donor: &[Point]) -> Result<Tour> {
    let mut in_window: HashMap<(u64, u64), usize> = HashMap::new();
    for slot in window {
        if let Slot::Occupied(p) = slot {
            *in_window.entry(p.key()).or_default() += 1;
        }
    }

    let mut fillers: Vec<Point> = Vec::with_capacity(donor.len());
    for &p in donor {
        match in_window.get_mut(&p.key()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => fillers.push(p),
        }
    }

    let needed = window.iter().filter(|s| s.is_empty()).count();
    let available = fillers.len();
    if available > needed {
        return Err(TspError::invalid(format!(
            "parents are not permutations of the same points: {} surplus filler points",
            available - needed
        )));
    }

    window
        .iter()
        .map(|slot| match *slot {
            Slot::Occupied(p) => Ok(p),
            Slot::Empty => fillers
                .pop()
                .ok_or(TspError::ExhaustedInput { needed, available }),
        })
        .collect()
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: returns a copy of `tour` with two distinct random
/// positions exchanged.
///
/// Indices are drawn uniformly and redrawn until they differ. Tours shorter
/// than two points have no such pair and are returned unchanged.
pub fn mutate<R: Rng>(tour: &[Point], rng: &mut R) -> Tour {
    let mut child = tour.to_vec();
    let n = child.len();
    if n < 2 {
        return child;
    }
    let (i, j) = loop {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        if i != j {
            break (i, j);
        }
    };
    child.swap(i, j);
    child
}

// ============================================================================
// Tests
// ============================================================================

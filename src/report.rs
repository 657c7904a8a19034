//! Progress reporting.
//!
//! The driver never formats output itself; it hands progress snapshots to
//! a [`Reporter`].

use crate::geometry::Point;
use tracing::info;

/// Receives progress snapshots from the evolution driver.
pub trait Reporter {
    /// Called for every reporting generation with the current best
    /// distance.
    fn on_progress(&mut self, generation: usize, best_distance: f64);

    /// Called once after the loop with the number of generations executed,
    /// the best distance and the best tour.
    fn on_finish(&mut self, generations: usize, best_distance: f64, best: &[Point]);
}

/// Logs progress through `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn on_progress(&mut self, generation: usize, best_distance: f64) {
        info!(generation, distance = best_distance, "progress");
    }

    fn on_finish(&mut self, generations: usize, best_distance: f64, best: &[Point]) {
        info!(generations, distance = best_distance, stops = best.len(), "finished");
    }
}

/// Discards all reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn on_progress(&mut self, _generation: usize, _best_distance: f64) {}

    fn on_finish(&mut self, _generations: usize, _best_distance: f64, _best: &[Point]) {}
}

/// Records every report in memory.
#[derive(Debug, Default, Clone)]
pub struct HistoryReporter {
    /// `(generation, best_distance)` for each progress report.
    pub progress: Vec<(usize, f64)>,
    /// Final report, if the run finished.
    pub finish: Option<(usize, f64, Vec<Point>)>,
}

impl Reporter for HistoryReporter {
    fn on_progress(&mut self, generation: usize, best_distance: f64) {
        self.progress.push((generation, best_distance));
    }

    fn on_finish(&mut self, generations: usize, best_distance: f64, best: &[Point]) {
        self.finish = Some((generations, best_distance, best.to_vec()));
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn on_progress(&mut self, generation: usize, best_distance: f64) {
        (**self).on_progress(generation, best_distance);
    }

    fn on_finish(&mut self, generations: usize, best_distance: f64, best: &[Point]) {
        (**self).on_finish(generations, best_distance, best);
    }
}

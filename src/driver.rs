//! Evolutionary loop execution.
//!
//! [`EvolutionDriver`] orchestrates a run:
//! initialization → (rank → select → recombine → mutate → replace → report)
//! × generations → finalize.
//!
//! Selection is elitist: the two shortest tours are always the parents, and
//! the two longest tours are always the ones replaced. Parents therefore
//! survive every generation and the best distance never increases.

use crate::config::EvolutionConfig;
use crate::error::{Result, TspError};
use crate::geometry::{tour_length, Point, Tour};
use crate::operators::{crossover, mutate};
use crate::population::{generate_destinations, generate_population, Population};
use crate::random::create_rng;
use crate::report::Reporter;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Result of an evolution run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult {
    /// The shortest tour in the final population.
    pub best: Tour,

    /// Length of `best`.
    pub best_distance: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best distance of each executed generation, after ranking.
    pub history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::{EvolutionConfig, EvolutionDriver, NoopReporter};
///
/// let config = EvolutionConfig::default()
///     .with_generations(50)
///     .with_population_size(20)
///     .with_seed(42);
/// let result = EvolutionDriver::run(&config, NoopReporter).unwrap();
/// assert_eq!(result.best.len(), 20);
/// ```
pub struct EvolutionDriver;

impl EvolutionDriver {
    /// Runs the solver on `population_size` randomly generated destinations.
    ///
    /// # Errors
    /// [`TspError::InvalidArgument`] if the configuration is invalid. Any
    /// operator error aborts the run and is returned as is.
    pub fn run<R: Reporter>(config: &EvolutionConfig, reporter: R) -> Result<EvolutionResult> {
        config.validate()?;
        let mut rng = seeded_rng(config);
        let destinations = generate_destinations(
            config.population_size,
            config.range_min,
            config.range_max,
            &mut rng,
        )?;
        evolve(&destinations, config, &mut rng, reporter)
    }

    /// Runs the solver on caller-supplied destinations.
    ///
    /// Coordinate range settings of `config` are ignored.
    ///
    /// # Errors
    /// [`TspError::InvalidArgument`] if the configuration is invalid or there
    /// are not more destinations than the crossover window size.
    pub fn run_with_destinations<R: Reporter>(
        destinations: &[Point],
        config: &EvolutionConfig,
        reporter: R,
    ) -> Result<EvolutionResult> {
        config.validate()?;
        if destinations.len() <= config.window_size() {
            return Err(TspError::invalid(format!(
                "{} destinations cannot hold a crossover window of {}",
                destinations.len(),
                config.window_size()
            )));
        }
        let mut rng = seeded_rng(config);
        evolve(destinations, config, &mut rng, reporter)
    }
}

fn seeded_rng(config: &EvolutionConfig) -> rand::rngs::StdRng {
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    debug!(seed, "seeded rng");
    create_rng(seed)
}

#[instrument(
    level = "debug",
    skip_all,
    fields(
        stops = destinations.len(),
        population_size = config.population_size,
        generations = config.generations
    )
)]
fn evolve<G: Rng, R: Reporter>(
    destinations: &[Point],
    config: &EvolutionConfig,
    rng: &mut G,
    mut reporter: R,
) -> Result<EvolutionResult> {
    let size = config.population_size;
    let window_size = config.window_size();

    let mut population = generate_population(destinations, size, rng);
    let mut history = Vec::with_capacity(config.generations);

    for generation in 0..config.generations {
        let (mut ranked, lengths) = rank(population, config.parallel);

        let child = crossover(&ranked[0], &ranked[1], window_size, rng)?;
        ranked[size - 1] = mutate(&child, rng);
        ranked[size - 2] = mutate(&child, rng);
        population = ranked;

        // Replacement only touches the tail, so the head is still the best.
        let best_distance = lengths[0];
        history.push(best_distance);

        if generation % config.report_interval == 0 {
            reporter.on_progress(generation, best_distance);
        }
    }

    let lengths = evaluate(&population, config.parallel);
    let best_idx = lengths
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .ok_or_else(|| TspError::invalid("population is empty"))?;
    let best = population.swap_remove(best_idx);
    let best_distance = lengths[best_idx];

    reporter.on_finish(config.generations, best_distance, &best);
    debug!(best_distance, "run complete");

    Ok(EvolutionResult {
        best,
        best_distance,
        generations: config.generations,
        history,
    })
}

/// Sorts the population by ascending tour length.
///
/// Returns the sorted population together with the matching lengths.
fn rank(population: Population, parallel: bool) -> (Population, Vec<f64>) {
    let lengths = evaluate(&population, parallel);
    let mut scored: Vec<(f64, Tour)> = lengths.into_iter().zip(population).collect();
    scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    let (lengths, ranked): (Vec<f64>, Population) = scored.into_iter().unzip();
    (ranked, lengths)
}

/// Computes the length of every tour in the population.
#[cfg(feature = "parallel")]
fn evaluate(population: &[Tour], parallel: bool) -> Vec<f64> {
    if parallel {
        population.par_iter().map(|t| tour_length(t)).collect()
    } else {
        population.iter().map(|t| tour_length(t)).collect()
    }
}

/// Computes the length of every tour in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate(population: &[Tour], _parallel: bool) -> Vec<f64> {
    population.iter().map(|t| tour_length(t)).collect()
}

// ============================================================================
// Tests
// ============================================================================

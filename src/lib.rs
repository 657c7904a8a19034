//! Genetic algorithm for the Euclidean Traveling Salesman Problem.
//!
//! A population of random visiting orders over a fixed set of 2D points is
//! evolved for a fixed number of generations:
//!
//! - **Ranking**: tours are sorted by closed-tour length ([`tour_length`]).
//! - **Selection**: the two shortest tours become the parents.
//! - **Crossover**: [`crossover`] keeps a random window of the first parent
//!   and fills the rest from the second parent without duplicates.
//! - **Mutation**: [`mutate`] swaps two positions of the child, twice
//!   independently, giving two offspring.
//! - **Replacement**: the offspring overwrite the two longest tours.
//!
//! Progress goes to a [`Reporter`]; [`TracingReporter`] logs it.
//!
//! # Example
//!
//! ```
//! use tsp_ga::{EvolutionConfig, EvolutionDriver, HistoryReporter};
//!
//! let config = EvolutionConfig::default()
//!     .with_generations(200)
//!     .with_population_size(16)
//!     .with_seed(1);
//! let mut reporter = HistoryReporter::default();
//! let result = EvolutionDriver::run(&config, &mut reporter).unwrap();
//!
//! assert_eq!(reporter.progress.len(), 2);
//! assert!(result.best_distance <= result.history[0]);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): evaluate tour lengths with rayon.
//! - `serde`: derive `Serialize`/`Deserialize` for the public data types.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
mod driver;
mod error;
pub mod geometry;
pub mod operators;
pub mod population;
pub mod random;
mod report;

pub use config::{EvolutionConfig, MIN_POPULATION_SIZE};
pub use driver::{EvolutionDriver, EvolutionResult};
pub use error::{Result, TspError};
pub use geometry::{tour_length, Point, Tour};
pub use operators::{crossover, fill_window, mutate, random_window, Slot};
pub use population::{generate_destinations, generate_population, Population};
pub use report::{HistoryReporter, NoopReporter, Reporter, TracingReporter};

//! # Zonelife Core
//!
//! A two-dimensional cellular automaton whose transition rule depends on
//! where a cell sits. The grid is cut into four quadrants:
//!
//! - **Damage** (low x, low y): survivors need exactly two neighbors; any
//!   other count wears down a per-cell damage counter until the cell dies.
//! - **StandardEast / StandardWest**: plain B3/S23.
//! - **Sensory** (high x, high y): born on two or more neighbors, dies on
//!   zero or more than three.
//!
//! After the rules run, a stochastic revival pass brings dead cells back at a
//! configurable rate and also revives their four orthogonal neighbors.
//!
//! ## Example
//!
//! ```
//! use zonelife_core::config::AppConfig;
//! use zonelife_core::Simulation;
//!
//! let mut config = AppConfig::default();
//! config.run.seed = Some(42);
//! config.run.generation_limit = Some(10);
//!
//! let mut sim = Simulation::new(config).unwrap();
//! sim.set_alive(60, 40).unwrap();
//! sim.start();
//! while sim.on_tick_elapsed().is_some() {}
//! assert_eq!(sim.generation(), 10);
//! ```

/// Frame-time accumulator driving generation timing
pub mod clock;
/// Configuration management for simulation parameters
pub mod config;
/// Run/pause state machine and generation limit
pub mod controller;
/// Typed engine errors
pub mod error;
/// Authoritative cell storage
pub mod grid;
/// Run statistics and structured logging
pub mod metrics;
/// Moore neighborhood counting
pub mod neighbors;
/// Stochastic revival pass
pub mod revival;
/// Per-zone transition rules
pub mod rules;
/// Engine handle owned by front ends
pub mod simulation;
/// Single-tick orchestration
pub mod stepper;
/// Quadrant classification
pub mod zone;

pub use controller::{GenerationController, GenerationLimit, Phase};
pub use error::{Result, SimError};
pub use grid::Grid;
pub use metrics::{init_logging, Metrics};
pub use rules::{CellState, ZoneLogic};
pub use simulation::Simulation;
pub use stepper::{StepReport, Stepper};
pub use zone::zone_of;
pub use zonelife_data::{Cell, CellView, Zone};

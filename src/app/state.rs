use std::fmt;
use std::time::Duration;

use anyhow::Result;
use zonelife_core::config::AppConfig;
use zonelife_core::{GenerationLimit, Simulation};

use crate::app::shutdown::ShutdownManager;

/// Frame cadence used by realtime mode (about 60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub generations: Option<u64>,
    pub seed: Option<u64>,
    /// Fraction of cells seeded alive before the first tick.
    pub fill: f64,
}

pub struct App {
    pub sim: Simulation,
    pub shutdown: ShutdownManager,
    pub frame_interval: Duration,
}

impl App {
    pub fn new(mut config: AppConfig, options: &RunOptions) -> Result<Self> {
        if options.generations.is_some() {
            config.run.generation_limit = options.generations;
        }
        if options.seed.is_some() {
            config.run.seed = options.seed;
        }

        let mut sim = Simulation::new(config)?;
        sim.randomize(options.fill)?;
        tracing::info!(
            fill = options.fill,
            alive = sim.alive_count(),
            "Initial population seeded"
        );

        Ok(Self {
            sim,
            shutdown: ShutdownManager::new(),
            frame_interval: FRAME_INTERVAL,
        })
    }

    pub fn summary(&self) -> RunSummary {
        let metrics = self.sim.metrics();
        RunSummary {
            generation: self.sim.generation(),
            limit: self.sim.generation_limit(),
            alive: self.sim.alive_count(),
            births: metrics.births(),
            deaths: metrics.deaths(),
            revived: metrics.revived(),
            cross_revived: metrics.cross_revived(),
            busiest_step: metrics.busiest_step(),
            elapsed: metrics.elapsed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub generation: u64,
    pub limit: GenerationLimit,
    pub alive: usize,
    pub births: u64,
    pub deaths: u64,
    pub revived: u64,
    pub cross_revived: u64,
    pub busiest_step: Duration,
    pub elapsed: Duration,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generations:   {} / {}", self.generation, self.limit)?;
        writeln!(f, "Alive cells:   {}", self.alive)?;
        writeln!(f, "Births:        {}", self.births)?;
        writeln!(f, "Deaths:        {}", self.deaths)?;
        writeln!(
            f,
            "Revivals:      {} (+{} cross)",
            self.revived, self.cross_revived
        )?;
        writeln!(f, "Slowest step:  {:?}", self.busiest_step)?;
        write!(f, "Wall time:     {:?}", self.elapsed)
    }
}

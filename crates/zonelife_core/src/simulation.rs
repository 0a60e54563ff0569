//! Engine handle owned by a front end.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zonelife_data::CellView;

use crate::clock::TickClock;
use crate::config::AppConfig;
use crate::controller::{GenerationController, GenerationLimit, Phase};
use crate::error::{Result, SimError};
use crate::grid::Grid;
use crate::metrics::Metrics;
use crate::stepper::{StepReport, Stepper};

/// A zoned automaton together with its run controller and random source.
///
/// Every mutation goes through `&mut self`, so nothing can touch the grid
/// while a tick is in progress. Seeds that arrive mid-frame can be deferred
/// with [`Simulation::queue_alive`]; they land at the start of the next tick.
pub struct Simulation<R: Rng = ChaCha8Rng> {
    config: AppConfig,
    grid: Grid,
    stepper: Stepper,
    controller: GenerationController,
    clock: TickClock,
    metrics: Metrics,
    pending_seeds: VecDeque<(i32, i32)>,
    rng: R,
}

impl Simulation<ChaCha8Rng> {
    /// Builds an engine seeded from `config.run.seed`, or from OS entropy
    /// when no seed is set.
    pub fn new(config: AppConfig) -> Result<Self> {
        let rng = match config.run.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(config: AppConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid.width, config.grid.height)?;
        let stepper = Stepper::new(
            config.rules.max_damage_counter,
            config.rules.revival_probability,
        )?;
        let controller = GenerationController::new(config.run.limit()?);
        let clock = TickClock::new(config.run.tick_interval())?;

        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            limit = %controller.limit(),
            fingerprint = %config.fingerprint(),
            "Simulation created"
        );

        Ok(Self {
            config,
            grid,
            stepper,
            controller,
            clock,
            metrics: Metrics::new(),
            pending_seeds: VecDeque::new(),
            rng,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    pub fn generation(&self) -> u64 {
        self.controller.generation()
    }

    pub fn generation_limit(&self) -> GenerationLimit {
        self.controller.limit()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    pub fn alive_count(&self) -> usize {
        self.grid.alive_count()
    }

    pub fn pending_seeds(&self) -> usize {
        self.pending_seeds.len()
    }

    pub fn is_valid_cell(&self, x: i32, y: i32) -> bool {
        self.grid.is_valid_cell(x, y)
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Result<CellView> {
        self.grid.get_cell(x, y)
    }

    pub fn set_alive(&mut self, x: i32, y: i32) -> Result<()> {
        self.grid
            .set_alive(x, y, self.config.rules.max_damage_counter)
    }

    /// Defers a seed to the start of the next tick. Bounds are checked now.
    pub fn queue_alive(&mut self, x: i32, y: i32) -> Result<()> {
        if !self.grid.is_valid_cell(x, y) {
            return Err(SimError::out_of_bounds(
                x,
                y,
                self.grid.width(),
                self.grid.height(),
            ));
        }
        self.pending_seeds.push_back((x, y));
        Ok(())
    }

    /// Sets each cell alive with probability `fill`, drawing from the engine
    /// RNG in storage order.
    pub fn randomize(&mut self, fill: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&fill) {
            return Err(SimError::invalid_config(format!(
                "fill fraction must be in [0, 1], got {fill}"
            )));
        }
        let max_damage = self.config.rules.max_damage_counter;
        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                if self.rng.gen_bool(fill) {
                    self.grid.set_alive(x, y, max_damage)?;
                }
            }
        }
        tracing::debug!(fill, alive = self.grid.alive_count(), "Grid randomized");
        Ok(())
    }

    /// Advances one generation regardless of run state. The generation
    /// counter belongs to the controller and is left alone.
    pub fn step(&mut self) -> StepReport {
        Self::run_step(
            &mut self.grid,
            &mut self.stepper,
            &mut self.metrics,
            &mut self.pending_seeds,
            &mut self.rng,
            self.config.rules.max_damage_counter,
        )
    }

    fn run_step(
        grid: &mut Grid,
        stepper: &mut Stepper,
        metrics: &mut Metrics,
        pending: &mut VecDeque<(i32, i32)>,
        rng: &mut R,
        max_damage: i32,
    ) -> StepReport {
        for (x, y) in pending.drain(..) {
            // Bounds were checked on enqueue and the grid never shrinks.
            if let Err(e) = grid.set_alive(x, y, max_damage) {
                tracing::warn!(error = %e, "Dropped queued seed");
            }
        }
        let started = Instant::now();
        let report = stepper.step(grid, rng);
        metrics.record_step(&report, started.elapsed());
        report
    }

    pub fn start(&mut self) -> bool {
        self.controller.start()
    }

    pub fn pause(&mut self) {
        self.controller.pause();
        self.clock.reset();
    }

    pub fn set_running(&mut self, running: bool) -> bool {
        if running {
            self.start()
        } else {
            self.pause();
            false
        }
    }

    /// Runs one generation if the controller is running and under its limit.
    pub fn on_tick_elapsed(&mut self) -> Option<StepReport> {
        let max_damage = self.config.rules.max_damage_counter;
        let Self {
            grid,
            stepper,
            controller,
            metrics,
            pending_seeds,
            rng,
            clock,
            ..
        } = self;
        let report = controller.on_tick_elapsed(|| {
            Self::run_step(grid, stepper, metrics, pending_seeds, rng, max_damage)
        });
        if controller.phase() == Phase::Completed {
            clock.reset();
        }
        report
    }

    /// Feeds frame time to the tick clock and runs a generation when due.
    pub fn advance(&mut self, dt: Duration) -> Option<StepReport> {
        if !self.controller.is_running() {
            return None;
        }
        if self.clock.advance(dt) {
            self.on_tick_elapsed()
        } else {
            None
        }
    }

    pub fn set_tick_interval(&mut self, interval: Duration) -> Result<()> {
        self.clock.set_interval(interval)
    }

    /// Installs a new limit, zeroes the generation count and fully resets the
    /// grid.
    pub fn set_generation_limit(&mut self, limit: GenerationLimit) -> Result<()> {
        if let GenerationLimit::Finite(n) = limit {
            GenerationLimit::finite(n)?;
        }
        self.controller.set_generation_limit(limit);
        self.clock.reset();
        self.reset_cells();
        tracing::info!(limit = %limit, "Generation limit changed");
        Ok(())
    }

    /// Stops the run, zeroes the generation count, kills every cell, zeroes
    /// damage counters and reassigns zones. The limit is kept.
    pub fn reset_grid(&mut self) {
        self.controller.clear();
        self.clock.reset();
        self.reset_cells();
        tracing::info!("Grid reset");
    }

    fn reset_cells(&mut self) {
        self.grid.reset();
        self.pending_seeds.clear();
        self.metrics.reset();
    }

    /// Kills every cell, zeroes the generation count and stops. The limit is
    /// kept.
    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.pending_seeds.clear();
        self.controller.clear();
        self.clock.reset();
        self.metrics.reset();
        tracing::info!("Grid cleared");
    }
}

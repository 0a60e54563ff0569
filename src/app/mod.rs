pub mod shutdown;
pub mod state;

pub use shutdown::ShutdownManager;
pub use state::{App, RunOptions, RunSummary};

use anyhow::{ensure, Result};
use std::time::Instant;

use zonelife_core::{GenerationLimit, Phase};

/// Generations between yields to the runtime in headless mode.
const HEADLESS_YIELD_EVERY: u64 = 64;

impl App {
    /// Runs generations back to back until the limit is reached or Ctrl-C
    /// is pressed.
    pub async fn run_headless(&mut self) -> Result<RunSummary> {
        ensure!(
            self.sim.generation_limit() != GenerationLimit::Unbounded,
            "headless mode needs a finite generation limit"
        );
        self.shutdown.install_ctrl_c_handler();

        self.sim.start();
        while !self.shutdown.is_shutdown_requested() {
            if self.sim.on_tick_elapsed().is_none() {
                break;
            }
            if self.sim.generation() % HEADLESS_YIELD_EVERY == 0 {
                tokio::task::yield_now().await;
            }
        }
        if self.shutdown.is_shutdown_requested() {
            self.sim.pause();
        }
        Ok(self.summary())
    }

    /// Drives the tick clock from wall-clock frames until the limit is
    /// reached or Ctrl-C is pressed.
    pub async fn run_realtime(&mut self) -> Result<RunSummary> {
        self.shutdown.install_ctrl_c_handler();
        if !self.sim.start() {
            return Ok(self.summary());
        }

        let mut frames = tokio::time::interval(self.frame_interval);
        let mut last_frame = Instant::now();
        while !self.shutdown.is_shutdown_requested() {
            frames.tick().await;
            let now = Instant::now();
            let dt = now.duration_since(last_frame);
            last_frame = now;

            if let Some(report) = self.sim.advance(dt) {
                tracing::debug!(
                    generation = self.sim.generation(),
                    alive = report.alive,
                    "Generation"
                );
            }
            if self.sim.phase() == Phase::Completed {
                break;
            }
        }
        self.sim.pause();
        Ok(self.summary())
    }
}

//! Run statistics and structured logging.

use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use crate::stepper::StepReport;

const SUMMARY_INTERVAL: u64 = 100;

/// Cumulative counters over every generation since the last reset.
#[derive(Debug, Clone)]
pub struct Metrics {
    generations: u64,
    births: u64,
    deaths: u64,
    revived: u64,
    cross_revived: u64,
    alive: usize,
    busiest_step: Duration,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: 0,
            births: 0,
            deaths: 0,
            revived: 0,
            cross_revived: 0,
            alive: 0,
            busiest_step: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Records a completed step with its duration.
    pub fn record_step(&mut self, report: &StepReport, duration: Duration) {
        self.generations += 1;
        self.births += report.births as u64;
        self.deaths += report.deaths as u64;
        self.revived += report.revived as u64;
        self.cross_revived += report.cross_revived as u64;
        self.alive = report.alive;
        self.busiest_step = self.busiest_step.max(duration);

        tracing::debug!(
            births = report.births,
            deaths = report.deaths,
            revived = report.revived,
            cross_revived = report.cross_revived,
            alive = report.alive,
            "Step"
        );

        if self.generations.is_multiple_of(SUMMARY_INTERVAL) {
            tracing::info!(
                generations = self.generations,
                alive = self.alive,
                births = self.births,
                deaths = self.deaths,
                revived = self.revived,
                duration_us = duration.as_micros() as u64,
                "Simulation summary"
            );
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths
    }

    #[must_use]
    pub fn revived(&self) -> u64 {
        self.revived
    }

    #[must_use]
    pub fn cross_revived(&self) -> u64 {
        self.cross_revived
    }

    #[must_use]
    pub fn alive(&self) -> usize {
        self.alive
    }

    #[must_use]
    pub fn busiest_step(&self) -> Duration {
        self.busiest_step
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs a fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}

//! Run/pause state machine and generation accounting.

use std::fmt;

use crate::error::{Result, SimError};
use crate::stepper::StepReport;

/// Upper bound on generations per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationLimit {
    Finite(u64),
    Unbounded,
}

impl GenerationLimit {
    pub fn finite(n: u64) -> Result<Self> {
        if n == 0 {
            return Err(SimError::invalid_config(
                "generation limit must be at least 1",
            ));
        }
        Ok(Self::Finite(n))
    }

    /// `None` means unbounded.
    pub fn from_option(limit: Option<u64>) -> Result<Self> {
        match limit {
            Some(n) => Self::finite(n),
            None => Ok(Self::Unbounded),
        }
    }

    #[inline]
    pub fn allows(&self, generation: u64) -> bool {
        match self {
            Self::Finite(n) => generation < *n,
            Self::Unbounded => true,
        }
    }
}

impl fmt::Display for GenerationLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    /// The generation limit was reached. Behaves like `Idle` except that
    /// `start` stays a no-op until the limit changes.
    Completed,
}

#[derive(Debug, Clone)]
pub struct GenerationController {
    generation: u64,
    limit: GenerationLimit,
    phase: Phase,
}

impl GenerationController {
    pub fn new(limit: GenerationLimit) -> Self {
        Self {
            generation: 0,
            limit,
            phase: Phase::Idle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn limit(&self) -> GenerationLimit {
        self.limit
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Returns whether the controller is now running.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Running => true,
            Phase::Idle | Phase::Completed if self.limit.allows(self.generation) => {
                self.phase = Phase::Running;
                tracing::info!(generation = self.generation, limit = %self.limit, "Simulation started");
                true
            }
            _ => {
                tracing::warn!(
                    generation = self.generation,
                    limit = %self.limit,
                    "Start ignored: generation limit reached"
                );
                false
            }
        }
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Idle;
            tracing::info!(generation = self.generation, "Simulation paused");
        }
    }

    pub fn set_running(&mut self, running: bool) -> bool {
        if running {
            self.start()
        } else {
            self.pause();
            false
        }
    }

    /// Runs `step` if a generation is due and accounts for it.
    ///
    /// Does nothing unless running. Reaching the limit moves to
    /// [`Phase::Completed`].
    pub fn on_tick_elapsed<F>(&mut self, step: F) -> Option<StepReport>
    where
        F: FnOnce() -> StepReport,
    {
        if self.phase != Phase::Running {
            return None;
        }
        if !self.limit.allows(self.generation) {
            self.complete();
            return None;
        }

        let report = step();
        self.generation += 1;
        if !self.limit.allows(self.generation) {
            self.complete();
        }
        Some(report)
    }

    fn complete(&mut self) {
        self.phase = Phase::Completed;
        tracing::info!(generation = self.generation, "Maximum generations reached");
    }

    /// Installs a new limit and starts counting from zero. The caller resets
    /// the grid.
    pub fn set_generation_limit(&mut self, limit: GenerationLimit) {
        self.limit = limit;
        self.generation = 0;
        self.phase = Phase::Idle;
    }

    /// Zeroes the counter and stops, keeping the limit.
    pub fn clear(&mut self) {
        self.generation = 0;
        self.phase = Phase::Idle;
    }
}

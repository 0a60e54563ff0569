//! One discrete tick: evaluate, revive, commit.

use rand::Rng;

use crate::error::{Result, SimError};
use crate::grid::Grid;
use crate::neighbors::alive_neighbors;
use crate::revival::{RevivalInjector, RevivalReport};
use crate::rules::{CellState, ZoneLogic};

/// What a single tick changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub births: usize,
    pub deaths: usize,
    pub revived: usize,
    pub cross_revived: usize,
    pub alive: usize,
}

/// Advances a [`Grid`] one generation at a time.
///
/// Rules read the grid as it was at the start of the tick and write into a
/// separate candidate buffer. The grid is only written during the final
/// commit, so no cell ever sees a neighbor's next state.
#[derive(Debug, Clone)]
pub struct Stepper {
    candidate: Vec<CellState>,
    max_damage: i32,
    revival: RevivalInjector,
}

impl Stepper {
    pub fn new(max_damage: i32, revival_probability: f64) -> Result<Self> {
        if max_damage < 1 {
            return Err(SimError::invalid_config(format!(
                "max damage counter must be at least 1, got {max_damage}"
            )));
        }
        Ok(Self {
            candidate: Vec::new(),
            max_damage,
            revival: RevivalInjector::new(revival_probability, max_damage)?,
        })
    }

    pub fn max_damage(&self) -> i32 {
        self.max_damage
    }

    pub fn revival_probability(&self) -> f64 {
        self.revival.probability()
    }

    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> StepReport {
        self.evaluate(grid);
        let revival = self.revival.apply(grid, &mut self.candidate, rng);
        self.commit(grid, revival)
    }

    fn evaluate(&mut self, grid: &Grid) {
        self.candidate.clear();
        self.candidate.reserve(grid.len());
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let cell = grid.cell(x, y);
                let state = CellState {
                    alive: cell.alive,
                    damage: cell.damage,
                };
                let n = alive_neighbors(grid, x, y);
                self.candidate
                    .push(cell.zone.transition(state, n, self.max_damage));
            }
        }
    }

    fn commit(&self, grid: &mut Grid, revival: RevivalReport) -> StepReport {
        let stats = grid.commit(&self.candidate);
        StepReport {
            births: stats.births,
            deaths: stats.deaths,
            revived: revival.revived,
            cross_revived: revival.cross_revived,
            alive: stats.alive,
        }
    }
}

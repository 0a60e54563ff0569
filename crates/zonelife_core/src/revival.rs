//! Spontaneous revival pass.
//!
//! Runs once per tick over the candidate buffer after every rule has been
//! evaluated. The scan is column by column: `x` outer, `y` inner. The pass
//! writes into the buffer it is scanning, so a cell forced alive by an earlier
//! cross-revival is already alive when the scan reaches it and draws no roll.
//! Changing the scan order changes outcomes for a fixed seed.

use rand::Rng;

use crate::error::{Result, SimError};
use crate::grid::Grid;
use crate::rules::{CellState, ZoneLogic};

/// Orthogonal offsets forced alive around a revived cell.
const CROSS_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

pub const DEFAULT_REVIVAL_PROBABILITY: f64 = 0.003;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevivalReport {
    /// Cells whose own roll succeeded.
    pub revived: usize,
    /// Neighbors that were dead and got forced alive by a cross-revival.
    pub cross_revived: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevivalInjector {
    probability: f64,
    max_damage: i32,
}

impl RevivalInjector {
    pub fn new(probability: f64, max_damage: i32) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(SimError::invalid_config(format!(
                "revival probability must be in [0, 1], got {probability}"
            )));
        }
        Ok(Self {
            probability,
            max_damage,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Rolls revival for every dead cell in `candidate`.
    ///
    /// `grid` supplies dimensions and zones only; liveness is read from
    /// `candidate`.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        candidate: &mut [CellState],
        rng: &mut R,
    ) -> RevivalReport {
        let mut report = RevivalReport::default();
        if self.probability <= 0.0 {
            return report;
        }

        for x in 0..grid.width() {
            for y in 0..grid.height() {
                let idx = grid.index(x, y);
                if candidate[idx].alive {
                    continue;
                }
                if rng.gen::<f64>() < self.probability {
                    self.revive(grid, candidate, x, y);
                    let forced = self.revive_cross(grid, candidate, x, y);
                    tracing::trace!(
                        x,
                        y,
                        zone = grid.cell(x, y).zone.label(),
                        forced,
                        "Cell revived"
                    );
                    report.revived += 1;
                    report.cross_revived += forced;
                }
            }
        }

        if report.revived > 0 {
            tracing::trace!(
                revived = report.revived,
                cross_revived = report.cross_revived,
                "Revival pass"
            );
        }
        report
    }

    #[inline]
    fn revive(&self, grid: &Grid, candidate: &mut [CellState], x: u16, y: u16) {
        let idx = grid.index(x, y);
        let state = &mut candidate[idx];
        state.alive = true;
        if grid.cell(x, y).zone.is_damage() {
            state.damage = self.max_damage;
        }
    }

    /// Returns how many of the four neighbors were dead before forcing.
    fn revive_cross(&self, grid: &Grid, candidate: &mut [CellState], x: u16, y: u16) -> usize {
        let mut forced = 0;
        for (dx, dy) in CROSS_OFFSETS {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if !grid.is_valid_cell(nx, ny) {
                continue;
            }
            let (nx, ny) = (nx as u16, ny as u16);
            if !candidate[grid.index(nx, ny)].alive {
                forced += 1;
            }
            self.revive(grid, candidate, nx, ny);
        }
        forced
    }
}

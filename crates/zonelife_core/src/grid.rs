//! Authoritative cell storage.

use zonelife_data::{Cell, CellView};

use crate::error::{Result, SimError};
use crate::rules::CellState;
use crate::zone::zone_of;

/// Dense `width` x `height` array of cells, stored row by row.
///
/// Zones are assigned on construction and on [`Grid::reset`] only.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

/// Outcome of writing a candidate buffer back into the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitStats {
    pub births: usize,
    pub deaths: usize,
    pub alive: usize,
}

impl Grid {
    /// Creates an all-dead grid with zones assigned.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SimError::invalid_config(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        let mut grid = Self {
            cells: Vec::with_capacity(width as usize * height as usize),
            width,
            height,
        };
        for y in 0..height {
            for x in 0..width {
                grid.cells.push(Cell::dead(zone_of(x, y, width, height)));
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    pub fn index(&self, x: u16, y: u16) -> usize {
        (y as usize * self.width as usize) + x as usize
    }

    pub fn is_valid_cell(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        if self.is_valid_cell(x, y) {
            Ok(self.index(x as u16, y as u16))
        } else {
            Err(SimError::out_of_bounds(x, y, self.width, self.height))
        }
    }

    /// Liveness lookup that treats anything off the grid as dead.
    #[inline]
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.is_valid_cell(x, y) && self.cells[self.index(x as u16, y as u16)].alive
    }

    /// In-bounds access for engine internals.
    #[inline]
    pub fn cell(&self, x: u16, y: u16) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Result<CellView> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx].view())
    }

    /// Marks a cell alive. Damage-zone cells get their counter re-armed to
    /// `max_damage`; other zones keep theirs.
    pub fn set_alive(&mut self, x: i32, y: i32, max_damage: i32) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        let cell = &mut self.cells[idx];
        cell.alive = true;
        if cell.zone.is_damage() {
            cell.damage = max_damage;
        }
        Ok(())
    }

    /// Kills every cell, zeroes damage counters and reassigns zones.
    pub fn reset(&mut self) {
        let (width, height) = (self.width, self.height);
        for y in 0..height {
            for x in 0..width {
                let idx = self.index(x, y);
                self.cells[idx] = Cell::dead(zone_of(x, y, width, height));
            }
        }
    }

    /// Kills every cell. Damage counters are left alone; any later birth in
    /// the damage zone re-arms them.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.alive = false;
        }
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Alive flag and damage counter for every cell, in storage order.
    pub fn states(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().map(|c| CellState {
            alive: c.alive,
            damage: c.damage,
        })
    }

    /// Writes `next` over the grid in one pass. `next` must be in storage
    /// order and cover every cell.
    pub(crate) fn commit(&mut self, next: &[CellState]) -> CommitStats {
        debug_assert_eq!(next.len(), self.cells.len());
        let mut stats = CommitStats::default();
        for (cell, state) in self.cells.iter_mut().zip(next) {
            match (cell.alive, state.alive) {
                (false, true) => stats.births += 1,
                (true, false) => stats.deaths += 1,
                _ => {}
            }
            if state.alive {
                stats.alive += 1;
            }
            cell.alive = state.alive;
            cell.damage = state.damage;
        }
        stats
    }
}

//! Per-zone transition rules.
//!
//! | Zone | Survive | Birth | Damage |
//! |---|---|---|---|
//! | `StandardEast`, `StandardWest` | n in {2, 3} | n == 3 | none |
//! | `Damage` | n == 2 | n > 3 | decrement on any other n, die at <= 0; birth sets max |
//! | `Sensory` | 1 <= n <= 3 | n >= 2 | none |

use zonelife_data::Zone;

/// Alive flag and damage counter of one cell, as carried through a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellState {
    pub alive: bool,
    pub damage: i32,
}

impl CellState {
    pub const DEAD: CellState = CellState {
        alive: false,
        damage: 0,
    };

    #[inline]
    pub fn alive_with(damage: i32) -> Self {
        Self {
            alive: true,
            damage,
        }
    }
}

pub trait ZoneLogic {
    /// Next state for a cell in this zone with `neighbors` live neighbors.
    fn transition(&self, state: CellState, neighbors: u8, max_damage: i32) -> CellState;
    fn label(&self) -> &'static str;
}

impl ZoneLogic for Zone {
    fn transition(&self, state: CellState, neighbors: u8, max_damage: i32) -> CellState {
        match self {
            Zone::StandardEast | Zone::StandardWest => standard(state, neighbors),
            Zone::Damage => damage(state, neighbors, max_damage),
            Zone::Sensory => sensory(state, neighbors),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Zone::Damage => "damage",
            Zone::StandardEast => "standard-east",
            Zone::StandardWest => "standard-west",
            Zone::Sensory => "sensory",
        }
    }
}

#[inline]
fn standard(state: CellState, n: u8) -> CellState {
    let alive = if state.alive {
        n == 2 || n == 3
    } else {
        n == 3
    };
    CellState { alive, ..state }
}

#[inline]
fn damage(state: CellState, n: u8, max_damage: i32) -> CellState {
    if state.alive && n != 2 {
        let damage = state.damage - 1;
        CellState {
            alive: damage > 0,
            damage,
        }
    } else if !state.alive && n > 3 {
        CellState::alive_with(max_damage)
    } else {
        state
    }
}

#[inline]
fn sensory(state: CellState, n: u8) -> CellState {
    let alive = if state.alive {
        (1..=3).contains(&n)
    } else {
        n > 1
    };
    CellState { alive, ..state }
}

use serde::{Deserialize, Serialize};

use super::zone::Zone;

/// A single grid cell.
///
/// `damage` only carries meaning inside [`Zone::Damage`]; other zones leave it
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub alive: bool,
    pub damage: i32,
    pub zone: Zone,
}

impl Cell {
    pub fn dead(zone: Zone) -> Self {
        Self {
            alive: false,
            damage: 0,
            zone,
        }
    }

    pub fn view(&self) -> CellView {
        CellView {
            alive: self.alive,
            zone: self.zone.id(),
            damage_counter: self.damage,
        }
    }
}

/// Read-only snapshot of a cell handed to presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub alive: bool,
    pub zone: u8,
    pub damage_counter: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_cell_view() {
        let view = Cell::dead(Zone::Sensory).view();
        assert!(!view.alive);
        assert_eq!(view.zone, 3);
        assert_eq!(view.damage_counter, 0);
    }
}

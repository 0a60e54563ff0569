//! Quadrant classification.

use zonelife_data::Zone;

/// Returns the zone owning `(x, y)` on a `width` x `height` grid.
///
/// The grid is split at `width / 2` and `height / 2` (floor division). Checks
/// run in a fixed order, so on odd dimensions the middle column and row belong
/// to the high side.
pub fn zone_of(x: u16, y: u16, width: u16, height: u16) -> Zone {
    let mid_w = width / 2;
    let mid_h = height / 2;
    if x < mid_w && y < mid_h {
        Zone::Damage
    } else if x >= mid_w && y < mid_h {
        Zone::StandardEast
    } else if x < mid_w && y >= mid_h {
        Zone::StandardWest
    } else {
        Zone::Sensory
    }
}

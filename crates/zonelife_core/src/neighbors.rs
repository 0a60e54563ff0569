use crate::grid::Grid;

/// Moore neighborhood offsets, centre excluded.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Counts live cells among the eight neighbors of `(x, y)`.
///
/// Positions past the grid edge count as dead; there is no wraparound.
pub fn alive_neighbors(grid: &Grid, x: u16, y: u16) -> u8 {
    let (cx, cy) = (x as i32, y as i32);
    MOORE_OFFSETS
        .iter()
        .filter(|(dx, dy)| grid.is_alive(cx + dx, cy + dy))
        .count() as u8
}

use crate::consts::{GRID_SIZE, SPAWN_ATTEMPTS};
use crate::grid::{Pos, Size};
use rand::Rng;
use std::error::Error;
use std::fmt;

/// The spawner exhausted its sampling budget without finding an
/// unoccupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoFreeCell;

impl fmt::Display for NoFreeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no free cell left to spawn on")
    }
}

impl Error for NoFreeCell {}

/// Draws a uniformly random grid-aligned cell that is not in `avoid`.
///
/// Rejection sampling: occupancy is sparse relative to the grid, so a
/// redraw almost always succeeds on the first few attempts. The attempt
/// budget keeps a saturated grid from hanging the tick loop.
pub fn random_cell(rng: &mut impl Rng, size: Size, avoid: &[Pos]) -> Result<Pos, NoFreeCell> {
    for _ in 0..SPAWN_ATTEMPTS {
        let pos = Pos {
            x: rng.gen_range(0..size.width / GRID_SIZE) * GRID_SIZE,
            y: rng.gen_range(0..size.height / GRID_SIZE) * GRID_SIZE,
        };
        if !avoid.contains(&pos) {
            return Ok(pos);
        }
    }
    Err(NoFreeCell)
}

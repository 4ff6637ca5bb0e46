use crate::consts;
use crate::grid::{random_cell, Bounds, Cell};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// Pick a random cell of the play area that is not in `occupied`.
///
/// Cells are sampled the same way as any other random placement, retrying on
/// occupied cells.  Once the retries are used up (which only happens on a
/// crowded board), the free cells are enumerated and one of them is chosen
/// uniformly.  Returns `None` if every cell is occupied.
pub(crate) fn place_food<R: Rng + ?Sized>(
    bounds: Bounds,
    occupied: &HashSet<Cell>,
    rng: &mut R,
) -> Option<Cell> {
    if occupied.len() >= bounds.area() && bounds.cells().all(|c| occupied.contains(&c)) {
        return None;
    }
    let attempts = bounds
        .area()
        .saturating_mul(consts::FOOD_PLACEMENT_ATTEMPTS_PER_CELL);
    for _ in 0..attempts {
        let cell = random_cell(bounds, consts::FOOD_SPAWN_MARGIN, rng);
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
    log::debug!("Random food placement exhausted {attempts} attempts; scanning for a free cell");
    bounds
        .cells()
        .filter(|c| !occupied.contains(c))
        .choose(rng)
}

//! Discrete play-area geometry
use crate::consts;
use rand::Rng;
use std::fmt;

/// A single grid position in the play area.
///
/// Coordinates are signed so that a head which has stepped off the top or
/// left edge (and is about to be declared out of bounds) is still
/// representable.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) col: i32,
    pub(crate) row: i32,
}

impl Cell {
    pub(crate) const fn new(col: i32, row: i32) -> Cell {
        Cell { col, row }
    }

    /// Return the cell displaced by the given vector
    pub(crate) fn offset(self, (dx, dy): (i32, i32)) -> Cell {
        Cell {
            col: self.col.saturating_add(dx),
            row: self.row.saturating_add(dy),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// The size of the play area, measured in cells
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Bounds {
    width: u16,
    height: u16,
}

impl Bounds {
    /// Create a play area of the given size.  Returns `None` if the area
    /// holds fewer than two cells, as there would be no room for both the
    /// snake and the food.
    pub(crate) fn new(width: u16, height: u16) -> Option<Bounds> {
        let bounds = Bounds { width, height };
        (bounds.area() >= 2).then_some(bounds)
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    /// Total number of cells in the play area
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Iterate over every cell in the play area in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        (0..i32::from(self.height))
            .flat_map(move |row| (0..i32::from(self.width)).map(move |col| Cell::new(col, row)))
    }

    /// Move `cell` to the nearest cell inside the play area
    fn clamp(self, cell: Cell) -> Cell {
        Cell {
            col: cell.col.clamp(0, i32::from(self.width) - 1),
            row: cell.row.clamp(0, i32::from(self.height) - 1),
        }
    }
}

impl Default for Bounds {
    fn default() -> Bounds {
        Bounds {
            width: consts::DEFAULT_BOARD_WIDTH,
            height: consts::DEFAULT_BOARD_HEIGHT,
        }
    }
}

/// Convert a non-negative pixel-space position to the cell containing it
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn to_cell((x, y): (f64, f64), cell_size: u16) -> Cell {
    let size = f64::from(cell_size);
    Cell {
        col: (x / size).floor() as i32,
        row: (y / size).floor() as i32,
    }
}

/// Uniformly sample a cell of the play area, excluding a margin of
/// `margin_fraction` of the area's extent on each side of each axis.
///
/// Sampling happens in continuous pixel space, and the result is then
/// snapped to the grid.
pub(crate) fn random_cell<R: Rng + ?Sized>(
    bounds: Bounds,
    margin_fraction: f64,
    rng: &mut R,
) -> Cell {
    let cell_size = f64::from(consts::CELL_SIZE);
    let x = sample_span(rng, f64::from(bounds.width) * cell_size, margin_fraction);
    let y = sample_span(rng, f64::from(bounds.height) * cell_size, margin_fraction);
    bounds.clamp(to_cell((x, y), consts::CELL_SIZE))
}

fn sample_span<R: Rng + ?Sized>(rng: &mut R, span: f64, margin_fraction: f64) -> f64 {
    let low = span * margin_fraction;
    let high = span * (1.0 - margin_fraction);
    if low < high {
        rng.random_range(low..high)
    } else {
        low
    }
}

/// Is `cell` inside the play area?
pub(crate) fn in_bounds(cell: Cell, bounds: Bounds) -> bool {
    (0..i32::from(bounds.width)).contains(&cell.col)
        && (0..i32::from(bounds.height)).contains(&cell.row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[rstest]
    #[case((0.0, 0.0), 40, Cell::new(0, 0))]
    #[case((39.9, 39.9), 40, Cell::new(0, 0))]
    #[case((40.0, 80.0), 40, Cell::new(1, 2))]
    #[case((599.0, 120.5), 40, Cell::new(14, 3))]
    #[case((99.0, 24.0), 25, Cell::new(3, 0))]
    fn test_to_cell(#[case] pos: (f64, f64), #[case] cell_size: u16, #[case] cell: Cell) {
        assert_eq!(to_cell(pos, cell_size), cell);
    }

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(14, 14), true)]
    #[case(Cell::new(7, 14), true)]
    #[case(Cell::new(-1, 7), false)]
    #[case(Cell::new(7, -1), false)]
    #[case(Cell::new(15, 7), false)]
    #[case(Cell::new(7, 15), false)]
    fn test_in_bounds(#[case] cell: Cell, #[case] r: bool) {
        let bounds = Bounds::new(15, 15).expect("15x15 should be a valid board");
        assert_eq!(in_bounds(cell, bounds), r);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(0, 15)]
    fn too_small_bounds(#[case] width: u16, #[case] height: u16) {
        assert_eq!(Bounds::new(width, height), None);
    }

    #[test]
    fn cells_row_major() {
        let bounds = Bounds::new(2, 3).expect("2x3 should be a valid board");
        let cells = bounds.cells().collect::<Vec<_>>();
        assert_eq!(
            cells,
            [
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
            ]
        );
        assert_eq!(cells.len(), bounds.area());
    }

    #[test]
    fn random_cell_respects_margin() {
        let bounds = Bounds::default();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..1000 {
            let cell = random_cell(bounds, consts::HEAD_SPAWN_MARGIN, &mut rng);
            assert!((3..12).contains(&cell.col), "{cell} is too close to an edge");
            assert!((3..12).contains(&cell.row), "{cell} is too close to an edge");
        }
    }

    #[test]
    fn random_cell_without_margin_covers_board() {
        let bounds = Bounds::new(4, 3).expect("4x3 should be a valid board");
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let cell = random_cell(bounds, 0.0, &mut rng);
            assert!(in_bounds(cell, bounds), "{cell} is outside the board");
            seen.insert(cell);
        }
        assert_eq!(seen.len(), bounds.area());
    }

    #[test]
    fn random_cell_with_full_margin() {
        let bounds = Bounds::new(10, 10).expect("10x10 should be a valid board");
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(random_cell(bounds, 0.5, &mut rng), Cell::new(5, 5));
    }
}

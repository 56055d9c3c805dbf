/// The puzzle grid: a size×size matrix of uppercase letters.
///
/// Cells start empty (`None`). The placement engine writes word letters,
/// then `fill_remaining` floods every still-empty cell with random filler.
/// After generation the grid is fully dense and is never mutated again;
/// selection and matching only read it.

use rand::Rng;

/// Filler alphabet for non-word cells.
pub const ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// A (row, col) cell coordinate. Both components are 0-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

pub struct Grid {
    size: usize,
    /// `None` = unoccupied. Occupancy and letter are one field:
    /// a cell is occupied exactly when it holds a letter.
    cells: Vec<Vec<Option<char>>>,
}

impl Grid {
    /// Create an empty size×size grid.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![vec![None; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Pure boundary predicate.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Letter at a cell. None when empty or out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<char> {
        if self.in_bounds(c.row, c.col) {
            self.cells[c.row][c.col]
        } else {
            None
        }
    }

    /// Write a letter. No occupancy checking — the caller (placement
    /// engine) enforces the overlap rules before writing.
    #[inline]
    pub fn set(&mut self, c: Coord, ch: char) {
        if self.in_bounds(c.row, c.col) {
            self.cells[c.row][c.col] = Some(ch);
        }
    }

    #[inline]
    pub fn is_empty_cell(&self, c: Coord) -> bool {
        self.in_bounds(c.row, c.col) && self.cells[c.row][c.col].is_none()
    }

    /// Flood every empty cell with a uniformly random filler letter.
    /// Must run only after all word placements are attempted; afterwards
    /// the grid is fully dense.
    pub fn fill_remaining(&mut self, rng: &mut impl Rng) {
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                if cell.is_none() {
                    *cell = Some(ALPHABET[rng.random_range(0..ALPHABET.len())]);
                }
            }
        }
    }

    /// Read the letters along a path in order. None if any cell is empty
    /// or out of bounds (cannot happen on a generated grid with a
    /// resolver-produced path, but callers stay honest).
    pub fn letters_along(&self, path: &[Coord]) -> Option<String> {
        path.iter().map(|&c| self.get(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_grid_is_empty() {
        let g = Grid::new(4);
        for r in 0..4 {
            for c in 0..4 {
                assert!(g.is_empty_cell(Coord::new(r, c)));
            }
        }
    }

    #[test]
    fn bounds_predicate() {
        let g = Grid::new(3);
        assert!(g.in_bounds(0, 0));
        assert!(g.in_bounds(2, 2));
        assert!(!g.in_bounds(3, 0));
        assert!(!g.in_bounds(0, 3));
    }

    #[test]
    fn set_then_get() {
        let mut g = Grid::new(3);
        g.set(Coord::new(1, 2), 'Q');
        assert_eq!(g.get(Coord::new(1, 2)), Some('Q'));
        assert!(!g.is_empty_cell(Coord::new(1, 2)));
    }

    #[test]
    fn out_of_bounds_set_is_noop() {
        let mut g = Grid::new(2);
        g.set(Coord::new(5, 5), 'X');
        assert_eq!(g.get(Coord::new(5, 5)), None);
    }

    #[test]
    fn fill_remaining_makes_grid_dense() {
        let mut g = Grid::new(6);
        g.set(Coord::new(0, 0), 'W');
        let mut rng = StdRng::seed_from_u64(1);
        g.fill_remaining(&mut rng);
        for r in 0..6 {
            for c in 0..6 {
                let ch = g.get(Coord::new(r, c)).expect("cell left empty");
                assert!(ALPHABET.contains(&ch) || ch == 'W');
            }
        }
        // Placed letter untouched by filler
        assert_eq!(g.get(Coord::new(0, 0)), Some('W'));
    }

    #[test]
    fn letters_along_path() {
        let mut g = Grid::new(3);
        g.set(Coord::new(0, 0), 'C');
        g.set(Coord::new(0, 1), 'A');
        g.set(Coord::new(0, 2), 'T');
        let path = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)];
        assert_eq!(g.letters_along(&path).as_deref(), Some("CAT"));
        // Empty cell in path → None
        let bad = [Coord::new(0, 0), Coord::new(1, 0)];
        assert_eq!(g.letters_along(&bad), None);
    }
}

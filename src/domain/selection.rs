/// Selection resolver: two pointer cells → a validated straight-line path.
///
/// Pure function, re-invoked on every pointer-move sample, so it must stay
/// O(grid size). A drag is only a selection when it lies on a row, a
/// column, or an exact 45° diagonal; anything else resolves to an empty
/// path and the gesture shows nothing until it re-aligns.

use super::grid::Coord;

/// Resolve the cell path from `start` to `end` on a size×size grid.
///
/// Returns the ordered cells including both endpoints, or an empty vec
/// when the vector is not axis/diagonal aligned or any cell would leave
/// the grid (rejected whole, never truncated — a partial highlight would
/// lie about what a release will match).
pub fn resolve(start: Coord, end: Coord, size: usize) -> Vec<Coord> {
    if start.row >= size || start.col >= size || end.row >= size || end.col >= size {
        return vec![];
    }
    if start == end {
        return vec![start];
    }

    let dr = end.row as i64 - start.row as i64;
    let dc = end.col as i64 - start.col as i64;

    // Horizontal, vertical, or |dr| == |dc| diagonal only.
    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return vec![];
    }

    let step_r = dr.signum();
    let step_c = dc.signum();
    let len = dr.abs().max(dc.abs()) + 1;

    let mut path = Vec::with_capacity(len as usize);
    for i in 0..len {
        let row = start.row as i64 + i * step_r;
        let col = start.col as i64 + i * step_c;
        if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
            return vec![];
        }
        path.push(Coord::new(row as usize, col as usize));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn same_cell_is_single_cell_path() {
        assert_eq!(resolve(c(2, 2), c(2, 2), 10), vec![c(2, 2)]);
    }

    #[test]
    fn horizontal_path() {
        assert_eq!(
            resolve(c(0, 0), c(0, 3), 10),
            vec![c(0, 0), c(0, 1), c(0, 2), c(0, 3)]
        );
    }

    #[test]
    fn vertical_path_upward() {
        assert_eq!(resolve(c(3, 1), c(1, 1), 10), vec![c(3, 1), c(2, 1), c(1, 1)]);
    }

    #[test]
    fn diagonal_path() {
        assert_eq!(
            resolve(c(0, 0), c(2, 2), 10),
            vec![c(0, 0), c(1, 1), c(2, 2)]
        );
        assert_eq!(
            resolve(c(2, 2), c(0, 4), 10),
            vec![c(2, 2), c(1, 3), c(0, 4)]
        );
    }

    #[test]
    fn knight_like_vector_is_invalid() {
        assert!(resolve(c(0, 0), c(3, 2), 10).is_empty());
        assert!(resolve(c(1, 1), c(2, 4), 10).is_empty());
    }

    #[test]
    fn out_of_grid_endpoint_is_rejected_whole() {
        assert!(resolve(c(0, 0), c(0, 5), 4).is_empty());
        assert!(resolve(c(7, 7), c(7, 7), 4).is_empty());
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve(c(1, 1), c(4, 4), 8);
        let b = resolve(c(1, 1), c(4, 4), 8);
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }
}

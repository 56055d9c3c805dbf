/// Placement directions: the 8 unit vectors around a cell.
/// Semantics are queried via methods so direction math stays in one place.

use super::grid::Coord;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Direction {
    pub dr: i32,
    pub dc: i32,
}

impl Direction {
    /// All 8 placement directions. Upward and leftward ("reverse")
    /// placements are deliberately included: the match engine accepts
    /// drags in either orientation, so every direction is discoverable.
    pub const ALL: [Direction; 8] = [
        Direction { dr: 0, dc: 1 },   // right
        Direction { dr: 1, dc: 0 },   // down
        Direction { dr: 1, dc: 1 },   // down-right
        Direction { dr: 1, dc: -1 },  // down-left
        Direction { dr: 0, dc: -1 },  // left
        Direction { dr: -1, dc: 0 },  // up
        Direction { dr: -1, dc: 1 },  // up-right
        Direction { dr: -1, dc: -1 }, // up-left
    ];

    /// The i-th cell from `start` along this direction, if it stays
    /// within a size×size grid.
    pub fn step_from(self, start: Coord, i: usize, size: usize) -> Option<Coord> {
        let row = start.row as i64 + self.dr as i64 * i as i64;
        let col = start.col as i64 + self.dc as i64 * i as i64;
        if row >= 0 && col >= 0 && (row as usize) < size && (col as usize) < size {
            Some(Coord::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_directions_are_distinct_unit_vectors() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert!(d.dr.abs() <= 1 && d.dc.abs() <= 1);
            assert!(!(d.dr == 0 && d.dc == 0));
            for other in &Direction::ALL[i + 1..] {
                assert_ne!(d, other);
            }
        }
        assert_eq!(Direction::ALL.len(), 8);
    }

    #[test]
    fn step_within_bounds() {
        let d = Direction { dr: 1, dc: 1 };
        assert_eq!(
            d.step_from(Coord::new(0, 0), 2, 5),
            Some(Coord::new(2, 2))
        );
    }

    #[test]
    fn step_out_of_bounds() {
        let up = Direction { dr: -1, dc: 0 };
        assert_eq!(up.step_from(Coord::new(0, 3), 1, 5), None);
        let right = Direction { dr: 0, dc: 1 };
        assert_eq!(right.step_from(Coord::new(0, 3), 2, 5), None);
    }
}

/// Placement engine: fit every word into the grid under the overlap rule.
///
/// Policy:
///   - Words are tried longest-first (near-grid-length words have the
///     fewest legal slots, so they go while the board is open).
///   - Per word: random start + random direction from the full 8-direction
///     set, retried up to ATTEMPT_CEILING times.
///   - A cell may be reused only when it already holds the exact letter
///     the word needs there.
///   - Words that do not fit are dropped and reported, never fatal.
///
/// Pure apart from the injected RNG: seeding the RNG reproduces a board.

use rand::Rng;

use super::direction::Direction;
use super::grid::{Coord, Grid};

/// Randomized retries per word before it is abandoned for the round.
pub const ATTEMPT_CEILING: usize = 1000;

/// A committed placement: reading `word.len()` cells from `start` along
/// `dir` reproduces the word exactly.
#[derive(Clone, Debug)]
pub struct Placement {
    pub word: String,
    pub start: Coord,
    pub dir: Direction,
}

impl Placement {
    /// The ordered cells spelling the word, in placement orientation.
    pub fn path(&self) -> Vec<Coord> {
        let len = self.word.chars().count();
        (0..len)
            .map(|i| {
                Coord::new(
                    (self.start.row as i64 + self.dir.dr as i64 * i as i64) as usize,
                    (self.start.col as i64 + self.dir.dc as i64 * i as i64) as usize,
                )
            })
            .collect()
    }
}

/// Outcome of placing a word list.
#[derive(Debug, Default)]
pub struct PlacementReport {
    pub placed: Vec<Placement>,
    /// Words that were too long for the grid or ran out of attempts.
    pub dropped: Vec<String>,
}

/// Place every word that fits; fill nothing (the caller floods filler
/// letters after deciding the report is acceptable).
pub fn place_words(grid: &mut Grid, words: &[String], rng: &mut impl Rng) -> PlacementReport {
    let size = grid.size();
    let mut report = PlacementReport::default();

    // Longest first; too-long words can never fit in any direction.
    let mut order: Vec<&String> = words.iter().collect();
    order.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    for word in order {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() || chars.len() > size {
            report.dropped.push(word.clone());
            continue;
        }

        match try_place(grid, &chars, rng) {
            Some((start, dir)) => {
                for (i, &ch) in chars.iter().enumerate() {
                    // step_from cannot fail here: can_place checked bounds.
                    if let Some(cell) = dir.step_from(start, i, size) {
                        grid.set(cell, ch);
                    }
                }
                report.placed.push(Placement {
                    word: word.clone(),
                    start,
                    dir,
                });
            }
            None => report.dropped.push(word.clone()),
        }
    }

    report
}

/// Bounded random search for a legal (start, direction) slot.
fn try_place(grid: &Grid, chars: &[char], rng: &mut impl Rng) -> Option<(Coord, Direction)> {
    let size = grid.size();
    for _ in 0..ATTEMPT_CEILING {
        let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let start = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
        if can_place(grid, chars, start, dir) {
            return Some((start, dir));
        }
    }
    None
}

/// Legal iff every cell stays in bounds and is empty or already holds
/// the letter the word requires there.
fn can_place(grid: &Grid, chars: &[char], start: Coord, dir: Direction) -> bool {
    let size = grid.size();
    for (i, &ch) in chars.iter().enumerate() {
        let cell = match dir.step_from(start, i, size) {
            Some(c) => c,
            None => return false,
        };
        match grid.get(cell) {
            None => {}
            Some(existing) if existing == ch => {}
            Some(_) => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn placed_word_reads_back_from_grid() {
        let mut grid = Grid::new(10);
        let mut rng = StdRng::seed_from_u64(42);
        let report = place_words(&mut grid, &words(&["LANTERN", "RIVER", "OAK"]), &mut rng);
        assert!(report.dropped.is_empty());
        for p in &report.placed {
            let spelled = grid.letters_along(&p.path()).expect("path left the grid");
            assert_eq!(spelled, p.word);
        }
    }

    #[test]
    fn longest_words_are_placed_first() {
        let mut grid = Grid::new(8);
        let mut rng = StdRng::seed_from_u64(7);
        let report = place_words(&mut grid, &words(&["AX", "MERIDIAN", "FOG"]), &mut rng);
        assert_eq!(report.placed[0].word, "MERIDIAN");
    }

    #[test]
    fn word_longer_than_grid_is_dropped_without_attempts() {
        let mut grid = Grid::new(4);
        let mut rng = StdRng::seed_from_u64(0);
        let report = place_words(&mut grid, &words(&["ELEPHANT"]), &mut rng);
        assert!(report.placed.is_empty());
        assert_eq!(report.dropped, vec!["ELEPHANT".to_string()]);
        // Grid untouched
        for r in 0..4 {
            for c in 0..4 {
                assert!(grid.is_empty_cell(Coord::new(r, c)));
            }
        }
    }

    #[test]
    fn overlap_requires_exact_letter_match() {
        let mut grid = Grid::new(3);
        grid.set(Coord::new(0, 1), 'Z');
        let chars: Vec<char> = "CAT".chars().collect();
        // Row 0 rightward crosses the 'Z' at (0,1) where 'A' is required.
        assert!(!can_place(&grid, &chars, Coord::new(0, 0), Direction { dr: 0, dc: 1 }));
        // Same slot is fine once the shared cell carries the right letter.
        grid.set(Coord::new(0, 1), 'A');
        assert!(can_place(&grid, &chars, Coord::new(0, 0), Direction { dr: 0, dc: 1 }));
    }

    #[test]
    fn can_place_rejects_out_of_bounds_runs() {
        let grid = Grid::new(3);
        let chars: Vec<char> = "CAT".chars().collect();
        assert!(!can_place(&grid, &chars, Coord::new(0, 2), Direction { dr: 0, dc: 1 }));
        assert!(!can_place(&grid, &chars, Coord::new(1, 0), Direction { dr: -1, dc: 0 }));
    }

    #[test]
    fn overlapping_placements_share_identical_letters() {
        let mut grid = Grid::new(12);
        let mut rng = StdRng::seed_from_u64(3);
        let list = words(&["STREAM", "MARSH", "REED", "STONE", "TRAIL"]);
        let report = place_words(&mut grid, &list, &mut rng);
        // Every placed word must still read back intact even where
        // placements crossed.
        for p in &report.placed {
            assert_eq!(grid.letters_along(&p.path()).unwrap(), p.word);
        }
    }

    #[test]
    fn seeded_rng_reproduces_the_board() {
        let list = words(&["CEDAR", "FERN", "MOSS"]);
        let mut a = Grid::new(9);
        let mut b = Grid::new(9);
        let ra = place_words(&mut a, &list, &mut StdRng::seed_from_u64(99));
        let rb = place_words(&mut b, &list, &mut StdRng::seed_from_u64(99));
        for (pa, pb) in ra.placed.iter().zip(rb.placed.iter()) {
            assert_eq!(pa.word, pb.word);
            assert_eq!(pa.start, pb.start);
            assert_eq!(pa.dir, pb.dir);
        }
    }
}

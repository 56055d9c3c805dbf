/// Puzzle domain: grid model, directions, word placement, selection geometry.
/// Pure logic — no terminal, no sound, no timing.

pub mod direction;
pub mod grid;
pub mod placement;
pub mod selection;

/// Events emitted by the game session.
/// The presentation layer consumes these for sound and status messages.

use crate::domain::grid::Coord;

#[derive(Clone, Debug)]
#[allow(dead_code)]
pub enum GameEvent {
    RoundStarted { theme: String, word_count: usize },
    /// A word could not be placed and was left out of the round.
    WordDropped { word: String },
    WordFound { word: String, path: Vec<Coord> },
    /// Fired exactly once, when the last remaining word is found.
    Victory,
}

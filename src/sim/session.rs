/// GameSession: the complete state of one word-search round.
///
/// ## Lifecycle
///
/// `Title → Playing → Won`. `start_round` performs setup (theme sample,
/// placement, filler) and enters Playing; Won is terminal until the next
/// `start_round`, which rebuilds everything from a fresh sample. There is
/// no other way back — restart always means new words and new placements.
///
/// ## Match engine
///
/// `check_selection` spells the released path forward and reversed and
/// tests both against the remaining word set, so a word may be dragged
/// from either end. The recorded found path is the placement orientation
/// (looked up from the placement records), not the drag orientation, so
/// the persistent highlight always reads the way the word sits in the
/// grid.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::config::GameConfig;
use crate::domain::grid::{Coord, Grid};
use crate::domain::placement::{self, Placement};
use crate::sim::event::GameEvent;
use crate::sim::words::{self, Theme};

/// Fresh samples tried before giving up on a playable round.
const GENERATION_RETRIES: usize = 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Title,
    Playing,
    Won,
}

/// A matched word with its canonical cell path, kept for the persistent
/// highlight.
#[derive(Clone, Debug)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Coord>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MatchOutcome {
    Matched(String),
    NoMatch,
}

#[derive(Debug, Error)]
pub enum RoundError {
    #[error("no word themes available")]
    NoThemes,
    #[error("could not build a playable board: {placed} words placed, {min} required")]
    NotEnoughWords { placed: usize, min: usize },
}

pub struct GameSession {
    pub phase: Phase,
    pub grid: Grid,
    pub theme: String,
    pub elapsed_secs: u32,

    /// Placed words in display order (alphabetical).
    word_list: Vec<String>,
    remaining: HashSet<String>,
    found: Vec<FoundWord>,
    placements: Vec<Placement>,

    /// O(1) found-cell lookup for rendering. `found_mask[row][col]` is
    /// true iff the cell belongs to some found word's path.
    found_mask: Vec<Vec<bool>>,

    // ── Status line ──
    pub message: String,
    pub message_timer: u32,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            phase: Phase::Title,
            grid: Grid::new(0),
            theme: String::new(),
            elapsed_secs: 0,
            word_list: vec![],
            remaining: HashSet::new(),
            found: vec![],
            placements: vec![],
            found_mask: vec![],
            message: String::new(),
            message_timer: 0,
        }
    }

    // ── Round setup ──

    /// Build a fresh round and enter Playing.
    ///
    /// Resamples up to GENERATION_RETRIES times until at least
    /// `min_words` words land on the board; an unplaceable pool fails the
    /// round instead of starting one that is trivially (or instantly)
    /// won.
    pub fn start_round(
        &mut self,
        themes: &[Theme],
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> Result<Vec<GameEvent>, RoundError> {
        let mut last_placed = 0;

        for _ in 0..GENERATION_RETRIES {
            let (theme, sample) =
                words::sample_round(themes, config, rng).ok_or(RoundError::NoThemes)?;

            let mut grid = Grid::new(config.grid_size);
            let report = placement::place_words(&mut grid, &sample, rng);
            last_placed = report.placed.len();
            if report.placed.len() < config.min_words {
                continue;
            }
            grid.fill_remaining(rng);

            let mut events = vec![GameEvent::RoundStarted {
                theme: theme.clone(),
                word_count: report.placed.len(),
            }];
            for word in &report.dropped {
                events.push(GameEvent::WordDropped { word: word.clone() });
            }

            let mut word_list: Vec<String> =
                report.placed.iter().map(|p| p.word.clone()).collect();
            word_list.sort();

            self.remaining = word_list.iter().cloned().collect();
            self.word_list = word_list;
            self.found = vec![];
            self.found_mask = vec![vec![false; config.grid_size]; config.grid_size];
            self.placements = report.placed;
            self.grid = grid;
            self.theme = theme;
            self.elapsed_secs = 0;
            self.phase = Phase::Playing;

            if report.dropped.is_empty() {
                self.set_message(&format!("Theme: {}", self.theme), 4);
            } else {
                self.set_message(
                    &format!(
                        "Theme: {} ({} word{} didn't fit)",
                        self.theme,
                        report.dropped.len(),
                        if report.dropped.len() == 1 { "" } else { "s" }
                    ),
                    5,
                );
            }
            return Ok(events);
        }

        Err(RoundError::NotEnoughWords {
            placed: last_placed,
            min: config.min_words,
        })
    }

    /// Back to the title screen, dropping the round.
    pub fn reset_to_title(&mut self) {
        *self = GameSession::new();
    }

    // ── Match engine ──

    /// Test a released selection path against the remaining words.
    /// Outside Playing, or with an empty path, this is always NoMatch
    /// with no events — which also makes Victory fire exactly once.
    pub fn check_selection(&mut self, path: &[Coord]) -> (MatchOutcome, Vec<GameEvent>) {
        if self.phase != Phase::Playing || path.is_empty() {
            return (MatchOutcome::NoMatch, vec![]);
        }

        let forward = match self.grid.letters_along(path) {
            Some(s) => s,
            None => return (MatchOutcome::NoMatch, vec![]),
        };
        let reversed: String = forward.chars().rev().collect();

        let word = if self.remaining.contains(&forward) {
            forward
        } else if self.remaining.contains(&reversed) {
            reversed
        } else {
            return (MatchOutcome::NoMatch, vec![]);
        };

        self.remaining.remove(&word);

        // Record the canonical (placement-orientation) path, falling back
        // to the drag path if the placement record is somehow missing.
        let canonical = self
            .placements
            .iter()
            .find(|p| p.word == word)
            .map(|p| p.path())
            .unwrap_or_else(|| path.to_vec());
        for &c in &canonical {
            if c.row < self.found_mask.len() && c.col < self.found_mask.len() {
                self.found_mask[c.row][c.col] = true;
            }
        }
        self.found.push(FoundWord {
            word: word.clone(),
            path: canonical.clone(),
        });

        let mut events = vec![GameEvent::WordFound {
            word: word.clone(),
            path: canonical,
        }];
        if self.remaining.is_empty() {
            self.phase = Phase::Won;
            events.push(GameEvent::Victory);
        }

        (MatchOutcome::Matched(word), events)
    }

    // ── Queries for the presentation layer ──

    pub fn word_list(&self) -> &[String] {
        &self.word_list
    }

    pub fn is_word_found(&self, word: &str) -> bool {
        !self.remaining.contains(word) && self.word_list.iter().any(|w| w == word)
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Is this cell part of some found word? O(1).
    pub fn is_found_cell(&self, c: Coord) -> bool {
        self.found_mask
            .get(c.row)
            .and_then(|row| row.get(c.col))
            .copied()
            .unwrap_or(false)
    }

    #[allow(dead_code)]
    pub fn found_words(&self) -> &[FoundWord] {
        &self.found
    }

    // ── Clock / status ──

    /// One-second tick: advances the play clock and ages the status
    /// message. Independent of gestures; no grid interaction.
    pub fn tick_second(&mut self) {
        if self.phase == Phase::Playing {
            self.elapsed_secs += 1;
        }
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message.clear();
            }
        }
    }

    pub fn set_message(&mut self, msg: &str, secs: u32) {
        self.message = msg.to_string();
        self.message_timer = secs;
    }
}

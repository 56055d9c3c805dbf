/// Presentation layer: crossterm renderer for the puzzle.
///
/// Layout (terminal cells):
///   - header line: title + play clock
///   - grid: each puzzle cell is a CELL_W × CELL_H block so drags feel
///     roughly square; the letter sits in the block's top-left area
///   - word panel to the right of the grid, found words struck through
///   - status/message line and key hints below the grid
///
/// Redraws are dirty-flag driven: the screen repaints only when state
/// changed (gesture, match, clock tick, resize), not every frame. All
/// commands are batched with `queue!` and flushed once.
///
/// The renderer also owns the inverse mapping (`hit_test`) from terminal
/// coordinates back to grid cells, so layout math lives in one place.

use std::io::{self, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::domain::grid::Coord;
use crate::sim::session::{GameSession, Phase};

// ── Layout constants ──

const GRID_X: u16 = 2;
const GRID_Y: u16 = 2;
const CELL_W: u16 = 4;
const CELL_H: u16 = 2;
const PANEL_GAP: u16 = 4;

// ── Colors ──

const COLOR_LETTER: Color = Color::White;
const COLOR_GRID_BG: Color = Color::Reset;
const COLOR_DRAG_BG: Color = Color::DarkBlue;
const COLOR_FOUND_BG: Color = Color::DarkGreen;
const COLOR_DIM: Color = Color::DarkGrey;
const COLOR_ACCENT: Color = Color::Yellow;

pub struct Renderer {
    dirty: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer { dirty: true }
    }

    /// Enter raw mode, alternate screen, mouse capture.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            cursor::Hide,
            Clear(ClearType::All),
        )?;
        self.dirty = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call after a failed init.
    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            io::stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show,
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Request a repaint on the next render call.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Map a terminal coordinate to the grid cell under it.
    pub fn hit_test(&self, col: u16, row: u16, grid_size: usize) -> Option<Coord> {
        if col < GRID_X || row < GRID_Y {
            return None;
        }
        let c = ((col - GRID_X) / CELL_W) as usize;
        let r = ((row - GRID_Y) / CELL_H) as usize;
        if r < grid_size && c < grid_size {
            Some(Coord::new(r, c))
        } else {
            None
        }
    }

    // ── Drawing ──

    pub fn render(&mut self, session: &GameSession, drag_path: &[Coord]) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.dirty = false;

        let mut out = io::stdout();
        queue!(out, Clear(ClearType::All), ResetColor)?;

        match session.phase {
            Phase::Title => draw_title(&mut out)?,
            Phase::Playing | Phase::Won => draw_board(&mut out, session, drag_path)?,
        }

        out.flush()
    }
}

fn draw_title(out: &mut impl Write) -> io::Result<()> {
    queue!(
        out,
        MoveTo(4, 2),
        SetForegroundColor(COLOR_ACCENT),
        SetAttribute(Attribute::Bold),
        Print("W O R D   S E E K"),
        SetAttribute(Attribute::Reset),
        ResetColor,
        MoveTo(4, 3),
        SetForegroundColor(COLOR_DIM),
        Print("terminal word search"),
        ResetColor,
        MoveTo(4, 6),
        Print("Drag across the letters with the mouse to select a word."),
        MoveTo(4, 7),
        Print("Words run in straight lines — across, down, or diagonal —"),
        MoveTo(4, 8),
        Print("and may be traced forwards or backwards."),
        MoveTo(4, 11),
        SetForegroundColor(COLOR_ACCENT),
        Print("[Enter] Start      [Esc]/[Q] Quit"),
        ResetColor,
    )
}

fn draw_board(out: &mut impl Write, session: &GameSession, drag_path: &[Coord]) -> io::Result<()> {
    let size = session.grid.size();

    // ── Header: title + clock ──
    let clock_x = GRID_X + size as u16 * CELL_W + PANEL_GAP;
    queue!(
        out,
        MoveTo(GRID_X, 0),
        SetAttribute(Attribute::Bold),
        SetForegroundColor(COLOR_ACCENT),
        Print("WORD SEEK"),
        SetAttribute(Attribute::Reset),
        ResetColor,
        MoveTo(clock_x, 0),
        Print(format!("Time {}", fmt_time(session.elapsed_secs))),
    )?;

    // ── Grid ──
    for r in 0..size {
        for c in 0..size {
            let coord = Coord::new(r, c);
            let bg = if drag_path.contains(&coord) {
                COLOR_DRAG_BG
            } else if session.is_found_cell(coord) {
                COLOR_FOUND_BG
            } else {
                COLOR_GRID_BG
            };
            let letter = session.grid.get(coord).unwrap_or(' ');

            let x = GRID_X + c as u16 * CELL_W;
            let y = GRID_Y + r as u16 * CELL_H;
            queue!(
                out,
                MoveTo(x, y),
                SetBackgroundColor(bg),
                SetForegroundColor(COLOR_LETTER),
                Print(format!(" {}  ", letter)),
            )?;
            // Lower half of the block: background only.
            if CELL_H > 1 {
                queue!(out, MoveTo(x, y + 1), Print("    "))?;
            }
            queue!(out, ResetColor)?;
        }
    }

    // ── Word panel ──
    let panel_x = clock_x;
    queue!(
        out,
        MoveTo(panel_x, GRID_Y),
        SetAttribute(Attribute::Bold),
        Print(format!(
            "{}  ({} left)",
            session.theme,
            session.remaining_count()
        )),
        SetAttribute(Attribute::Reset),
    )?;
    for (i, word) in session.word_list().iter().enumerate() {
        let y = GRID_Y + 2 + i as u16;
        if session.is_word_found(word) {
            queue!(
                out,
                MoveTo(panel_x, y),
                SetForegroundColor(COLOR_DIM),
                SetAttribute(Attribute::CrossedOut),
                Print(word),
                SetAttribute(Attribute::Reset),
                ResetColor,
            )?;
        } else {
            queue!(out, MoveTo(panel_x, y), Print(word))?;
        }
    }

    // ── Status / hints ──
    let status_y = GRID_Y + size as u16 * CELL_H + 1;
    if session.phase == Phase::Won {
        queue!(
            out,
            MoveTo(GRID_X, status_y),
            SetForegroundColor(COLOR_ACCENT),
            SetAttribute(Attribute::Bold),
            Print(format!(
                "COMPLETE!  All words found in {}.",
                fmt_time(session.elapsed_secs)
            )),
            SetAttribute(Attribute::Reset),
            ResetColor,
            MoveTo(GRID_X, status_y + 1),
            Print("[Enter] New round    [Esc] Title"),
        )?;
    } else {
        if !session.message.is_empty() {
            queue!(
                out,
                MoveTo(GRID_X, status_y),
                SetForegroundColor(COLOR_ACCENT),
                Print(&session.message),
                ResetColor,
            )?;
        }
        queue!(
            out,
            MoveTo(GRID_X, status_y + 1),
            SetForegroundColor(COLOR_DIM),
            Print("[R] New round    [Esc] Title    [Ctrl-C] Quit"),
            ResetColor,
        )?;
    }

    Ok(())
}

fn fmt_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

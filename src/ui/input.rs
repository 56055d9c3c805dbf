/// Input state tracker.
///
/// Drains all pending terminal events once per frame without blocking.
/// Keyboard here is edge-triggered only (menu keys, restart, quit);
/// the pointer work is carried by the raw mouse events, which the game
/// loop translates into abstract gesture events.

use std::time::Duration;

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent};

pub struct InputState {
    /// Keys pressed (or repeated) during the most recent drain.
    pressed: Vec<KeyCode>,
    /// Raw key events for modifier checks (Ctrl+C).
    raw_events: Vec<KeyEvent>,
    /// Mouse events in arrival order — order matters for drag resolution.
    mouse_events: Vec<MouseEvent>,
    resized: bool,
    focus_lost: bool,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            pressed: Vec::with_capacity(8),
            raw_events: Vec::with_capacity(8),
            mouse_events: Vec::with_capacity(16),
            resized: false,
            focus_lost: false,
        }
    }

    /// Drain all pending terminal events. Call once per frame.
    pub fn drain_events(&mut self) {
        self.pressed.clear();
        self.raw_events.clear();
        self.mouse_events.clear();
        self.resized = false;
        self.focus_lost = false;

        while poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if key.kind != KeyEventKind::Release {
                        self.pressed.push(key.code);
                        self.raw_events.push(key);
                    }
                }
                Ok(Event::Mouse(mouse)) => self.mouse_events.push(mouse),
                Ok(Event::Resize(_, _)) => self.resized = true,
                Ok(Event::FocusLost) => self.focus_lost = true,
                _ => {}
            }
        }
    }

    pub fn was_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    /// Convenience: was any of these keys pressed this frame?
    pub fn any_pressed(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|c| self.was_pressed(*c))
    }

    pub fn ctrl_c_pressed(&self) -> bool {
        use crossterm::event::KeyModifiers;
        self.raw_events.iter().any(|k| {
            k.modifiers.contains(KeyModifiers::CONTROL)
                && (k.code == KeyCode::Char('c') || k.code == KeyCode::Char('C'))
        })
    }

    pub fn mouse_events(&self) -> &[MouseEvent] {
        &self.mouse_events
    }

    pub fn was_resized(&self) -> bool {
        self.resized
    }

    pub fn lost_focus(&self) -> bool {
        self.focus_lost
    }
}

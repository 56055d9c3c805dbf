/// Gesture state machine: Idle → Dragging → released/cancelled.
///
/// Consumes abstract pointer events so the core never sees crossterm
/// types; the UI layer translates mouse (or any other pointer source)
/// into these. Exactly one pointer may drag at a time: presses from a
/// second pointer id are ignored until the active one ends.

use crate::domain::grid::Coord;
use crate::domain::selection;

pub type PointerId = u8;

#[derive(Clone, Copy, Debug)]
pub enum PointerEvent {
    Press { id: PointerId, cell: Coord },
    Move { id: PointerId, cell: Coord },
    Release { id: PointerId },
    Cancel { id: PointerId },
}

struct Drag {
    id: PointerId,
    anchor: Coord,
    /// Transient path, recomputed on every move. May be empty while the
    /// drag vector is off-axis; always starts at `anchor` otherwise.
    path: Vec<Coord>,
}

pub struct GestureTracker {
    active: Option<Drag>,
}

impl GestureTracker {
    pub fn new() -> Self {
        GestureTracker { active: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The current transient path (empty when idle or off-axis).
    pub fn path(&self) -> &[Coord] {
        self.active.as_ref().map(|d| d.path.as_slice()).unwrap_or(&[])
    }

    /// Feed one pointer event. Returns the final path when the active
    /// pointer releases; Cancel discards the drag without producing one.
    pub fn handle(&mut self, event: PointerEvent, grid_size: usize) -> Option<Vec<Coord>> {
        match event {
            PointerEvent::Press { id, cell } => {
                if self.active.is_none() {
                    self.active = Some(Drag {
                        id,
                        anchor: cell,
                        path: vec![cell],
                    });
                }
                None
            }
            PointerEvent::Move { id, cell } => {
                if let Some(drag) = self.active.as_mut() {
                    if drag.id == id {
                        drag.path = selection::resolve(drag.anchor, cell, grid_size);
                    }
                }
                None
            }
            PointerEvent::Release { id } => match self.active.take() {
                Some(drag) if drag.id == id => Some(drag.path),
                other => {
                    // Release of a non-active pointer: put the drag back.
                    self.active = other;
                    None
                }
            },
            PointerEvent::Cancel { id } => {
                if self.active.as_ref().is_some_and(|d| d.id == id) {
                    self.active = None;
                }
                None
            }
        }
    }

    /// Host-side abort (focus loss, phase change): drop any drag.
    pub fn abort(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn press_move_release_produces_path() {
        let mut g = GestureTracker::new();
        g.handle(PointerEvent::Press { id: 0, cell: c(1, 1) }, 10);
        assert!(g.is_dragging());
        assert_eq!(g.path(), &[c(1, 1)]);
        g.handle(PointerEvent::Move { id: 0, cell: c(1, 4) }, 10);
        assert_eq!(g.path(), &[c(1, 1), c(1, 2), c(1, 3), c(1, 4)]);
        let released = g.handle(PointerEvent::Release { id: 0 }, 10);
        assert_eq!(released.unwrap(), vec![c(1, 1), c(1, 2), c(1, 3), c(1, 4)]);
        assert!(!g.is_dragging());
    }

    #[test]
    fn off_axis_move_clears_transient_path_but_keeps_drag() {
        let mut g = GestureTracker::new();
        g.handle(PointerEvent::Press { id: 0, cell: c(0, 0) }, 10);
        g.handle(PointerEvent::Move { id: 0, cell: c(3, 2) }, 10);
        assert!(g.is_dragging());
        assert!(g.path().is_empty());
        // Re-aligning restores a path from the same anchor.
        g.handle(PointerEvent::Move { id: 0, cell: c(3, 3) }, 10);
        assert_eq!(g.path().len(), 4);
        assert_eq!(g.path()[0], c(0, 0));
    }

    #[test]
    fn second_pointer_is_ignored_until_first_ends() {
        let mut g = GestureTracker::new();
        g.handle(PointerEvent::Press { id: 0, cell: c(2, 2) }, 10);
        g.handle(PointerEvent::Press { id: 1, cell: c(5, 5) }, 10);
        g.handle(PointerEvent::Move { id: 1, cell: c(5, 7) }, 10);
        // Still the first pointer's anchor-only path.
        assert_eq!(g.path(), &[c(2, 2)]);
        assert!(g.handle(PointerEvent::Release { id: 1 }, 10).is_none());
        assert!(g.is_dragging());
        let released = g.handle(PointerEvent::Release { id: 0 }, 10);
        assert_eq!(released.unwrap(), vec![c(2, 2)]);
    }

    #[test]
    fn cancel_discards_without_resolving() {
        let mut g = GestureTracker::new();
        g.handle(PointerEvent::Press { id: 0, cell: c(0, 0) }, 10);
        g.handle(PointerEvent::Move { id: 0, cell: c(0, 3) }, 10);
        assert!(g.handle(PointerEvent::Cancel { id: 0 }, 10).is_none());
        assert!(!g.is_dragging());
        assert!(g.path().is_empty());
        // Cancelling again is idempotent.
        g.handle(PointerEvent::Cancel { id: 0 }, 10);
        assert!(!g.is_dragging());
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut g = GestureTracker::new();
        g.handle(PointerEvent::Move { id: 0, cell: c(4, 4) }, 10);
        assert!(!g.is_dragging());
        assert!(g.handle(PointerEvent::Release { id: 0 }, 10).is_none());
    }
}

//! Turns raw terminal events into discrete game commands.

use crate::geometry::BoardGeometry;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tictactoe_core::Coord;
use tracing::{debug, instrument};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// One user intent, fired once per press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place at a clicked cell.
    Place(Coord),
    /// Place at the keyboard cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Start the next round.
    Retry,
    /// Leave the game.
    Quit,
}

/// Press/release edge detector for the primary mouse button.
///
/// Some terminals repeat the press report while the button is held; only
/// the first one counts until the button is released.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClickLatch {
    held: bool,
}

impl ClickLatch {
    /// Records a press. Returns `true` on the released-to-pressed edge.
    pub fn press(&mut self) -> bool {
        let fired = !self.held;
        self.held = true;
        fired
    }

    /// Records a release, re-arming the latch.
    pub fn release(&mut self) {
        self.held = false;
    }

    /// True while the button is held.
    #[cfg(test)]
    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Translates a terminal event.
///
/// Mouse clicks need the geometry of the last drawn frame; clicks before
/// the first frame, on grid lines or outside the board are dropped.
#[instrument(skip(latch, geometry))]
pub fn translate(
    event: &Event,
    latch: &mut ClickLatch,
    geometry: Option<&BoardGeometry>,
) -> Option<Command> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, latch, geometry),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Retry),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Up => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Command::MoveCursor(Direction::Right)),
        _ => None,
    }
}

fn translate_mouse(
    mouse: &MouseEvent,
    latch: &mut ClickLatch,
    geometry: Option<&BoardGeometry>,
) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !latch.press() {
                debug!("Repeated press ignored");
                return None;
            }
            let coord = geometry?.cell_at(mouse.column, mouse.row)?;
            Some(Command::Place(coord))
        }
        MouseEventKind::Up(MouseButton::Left) => {
            latch.release();
            None
        }
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Coord, direction: Direction, size: usize) -> Coord {
    let last = size.saturating_sub(1);
    match direction {
        Direction::Up => Coord::new(cursor.x, cursor.y.saturating_sub(1)),
        Direction::Down => Coord::new(cursor.x, (cursor.y + 1).min(last)),
        Direction::Left => Coord::new(cursor.x.saturating_sub(1), cursor.y),
        Direction::Right => Coord::new((cursor.x + 1).min(last), cursor.y),
    }
}

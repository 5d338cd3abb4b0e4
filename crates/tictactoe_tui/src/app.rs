//! Application context shared by the render and input loop.

use crate::geometry::BoardGeometry;
use crate::input::{self, ClickLatch, Command};
use crossterm::event::Event;
use tictactoe_core::{BoardError, Coord, MatchController, MatchSnapshot, MoveResult};
use tracing::{debug, info, instrument};

/// Everything the loop needs: the match plus input-side state.
///
/// Built once in `main` and passed to the loop by reference.
pub struct App {
    game: MatchController,
    cursor: Coord,
    latch: ClickLatch,
    geometry: Option<BoardGeometry>,
    quit: bool,
}

impl App {
    /// Wraps a match.
    #[instrument(skip(game))]
    pub fn new(game: MatchController) -> Self {
        Self {
            game,
            cursor: Coord::new(0, 0),
            latch: ClickLatch::default(),
            geometry: None,
            quit: false,
        }
    }

    /// Read-only state for the next frame.
    pub fn snapshot(&self) -> MatchSnapshot {
        self.game.snapshot()
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Records where the last frame drew the board.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = Some(geometry);
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: &Event) -> Result<(), BoardError> {
        match input::translate(event, &mut self.latch, self.geometry.as_ref()) {
            Some(command) => self.handle(command),
            None => Ok(()),
        }
    }

    /// Applies one command to the match.
    ///
    /// Out-of-range placements are mapping bugs and are returned as errors.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Result<(), BoardError> {
        match command {
            Command::Place(coord) => {
                self.cursor = coord;
                self.place(coord)?;
            }
            Command::PlaceAtCursor => self.place(self.cursor)?,
            Command::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction, self.game.board().size());
            }
            Command::Retry => {
                if self.game.retry() {
                    info!(round = self.game.round(), "Retry accepted");
                }
            }
            Command::Quit => {
                info!("User quit");
                self.quit = true;
            }
        }
        Ok(())
    }

    fn place(&mut self, coord: Coord) -> Result<(), BoardError> {
        match self.game.apply_move(coord)? {
            MoveResult::Placed(outcome) => debug!(%coord, %outcome, "Move placed"),
            MoveResult::Ignored(reason) => debug!(%coord, %reason, "Move ignored"),
        }
        Ok(())
    }
}

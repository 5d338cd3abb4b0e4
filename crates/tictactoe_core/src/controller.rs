//! Match state machine: turns, rounds, retries and scores.

use super::action::{MoveResult, Rejection};
use super::board::{Board, BoardError};
use super::config::{ConfigError, MatchConfig, StartPolicy};
use super::invariants::{InvariantSet, MatchInvariants};
use super::player::Player;
use super::rules::evaluate;
use super::snapshot::{CellView, MatchSnapshot, PlayerView};
use super::types::{Coord, Mark, RoundOutcome, Seat};
use tracing::{debug, info, instrument, warn};

/// Drives a match of repeated rounds between two players.
///
/// The round is `Playing` while the outcome is `InProgress` and
/// `RoundOver` otherwise; [`MatchController::retry`] starts the next round.
/// Scores persist across rounds.
#[derive(Debug, Clone)]
pub struct MatchController {
    board: Board,
    players: [Player; 2],
    active: Seat,
    opened: Seat,
    outcome: RoundOutcome,
    accepting_moves: bool,
    start_policy: StartPolicy,
    round: u32,
}

impl MatchController {
    /// Creates a match and starts its first round.
    #[instrument(skip(config), fields(board_size = *config.board_size()))]
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let ceiling = *config.score_ceiling();
        let players = [
            Player::new(config.name(Seat::One), Seat::One, Mark::Cross, ceiling),
            Player::new(config.name(Seat::Two), Seat::Two, Mark::Circle, ceiling),
        ];
        let board = Board::new(*config.board_size());
        let outcome = evaluate(&board);
        let first = *config.first_seat();

        info!(
            size = board.size(),
            ceiling = ceiling.get(),
            first = %first,
            "Match created"
        );

        Ok(Self {
            board,
            players,
            active: first,
            opened: first,
            outcome,
            accepting_moves: outcome.is_in_progress(),
            start_policy: *config.start_policy(),
            round: 1,
        })
    }

    /// Places the active seat's mark at `coord`.
    ///
    /// Occupied cells and moves after the round is decided are ignored
    /// without changing anything. Coordinates off the board are a caller
    /// bug and come back as [`BoardError::OutOfRange`].
    #[instrument(skip(self), fields(active = %self.active, round = self.round))]
    pub fn apply_move(&mut self, coord: Coord) -> Result<MoveResult, BoardError> {
        // Range first: a mapping bug must surface even after the round ends.
        self.board.cell_at(coord)?;

        if !self.accepting_moves {
            debug!("Move ignored, round is over");
            return Ok(MoveResult::Ignored(Rejection::RoundOver));
        }

        match self.board.place(coord, self.active) {
            Ok(()) => {}
            Err(BoardError::CellOccupied(_)) => {
                debug!("Move ignored, cell occupied");
                return Ok(MoveResult::Ignored(Rejection::CellOccupied));
            }
            Err(e) => return Err(e),
        }

        self.outcome = evaluate(&self.board);
        match self.outcome {
            RoundOutcome::Won { winner, line } => {
                self.accepting_moves = false;
                let player = &mut self.players[winner.index()];
                player.increment_score();
                info!(
                    winner = player.name(),
                    %line,
                    score = player.score(),
                    "Round won"
                );
            }
            RoundOutcome::Draw => {
                self.accepting_moves = false;
                info!("Round drawn");
            }
            RoundOutcome::InProgress => {
                self.active = self.active.opponent();
                debug!(next = %self.active, "Turn passed");
            }
        }

        self.check_invariants();
        Ok(MoveResult::Placed(self.outcome))
    }

    /// Starts a fresh round once the current one is decided.
    ///
    /// Clears the board and keeps both scores. Returns `false`, changing
    /// nothing, while the round is still being played.
    #[instrument(skip(self), fields(round = self.round, policy = %self.start_policy))]
    pub fn retry(&mut self) -> bool {
        if self.accepting_moves {
            debug!("Retry ignored, round still in progress");
            return false;
        }

        self.board.reset();
        self.active = self.start_policy.next_starter(self.opened, self.active);
        self.opened = self.active;
        self.outcome = evaluate(&self.board);
        self.accepting_moves = self.outcome.is_in_progress();
        self.round += 1;

        info!(round = self.round, starter = %self.active, "New round");
        self.check_invariants();
        true
    }

    /// Copies the current state for rendering.
    pub fn snapshot(&self) -> MatchSnapshot {
        let cells = self
            .board
            .cells()
            .iter()
            .map(|cell| {
                cell.map(|seat| CellView {
                    seat,
                    mark: self.player(seat).mark(),
                })
            })
            .collect();

        MatchSnapshot {
            size: self.board.size(),
            cells,
            active: self.active,
            outcome: self.outcome,
            players: [self.player_view(Seat::One), self.player_view(Seat::Two)],
            round: self.round,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Outcome as of the last board change.
    pub fn outcome(&self) -> &RoundOutcome {
        &self.outcome
    }

    /// Seat to move (or that was to move when the round ended).
    pub fn active(&self) -> Seat {
        self.active
    }

    /// Player to move.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Both players, seat one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// True while the round is being played.
    pub fn is_accepting_moves(&self) -> bool {
        self.accepting_moves
    }

    /// 1-based round number.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Retry start policy.
    pub fn start_policy(&self) -> StartPolicy {
        self.start_policy
    }

    fn player_view(&self, seat: Seat) -> PlayerView {
        let player = self.player(seat);
        PlayerView {
            seat,
            name: player.name().to_string(),
            mark: player.mark(),
            score: player.score(),
        }
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = MatchInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(invariant = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Match invariants violated");
        }
    }

    #[cfg(test)]
    pub(crate) fn set_score_for_test(&mut self, seat: Seat, wins: u32) {
        for _ in 0..wins {
            self.players[seat.index()].increment_score();
        }
    }
}

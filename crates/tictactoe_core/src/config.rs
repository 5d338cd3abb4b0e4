//! Match configuration.

use super::player::DEFAULT_SCORE_CEILING;
use super::types::Seat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use tracing::instrument;

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Which seat opens the next round after a retry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StartPolicy {
    /// Keep whichever seat was active when the previous round ended.
    #[default]
    Carry,
    /// Seat one always opens.
    SeatOne,
    /// The seat that did not open the previous round.
    Alternate,
}

impl StartPolicy {
    /// Seat opening the next round.
    ///
    /// `opened` is the seat that opened the round just finished, `active`
    /// the seat that was active when it ended.
    #[instrument]
    pub fn next_starter(self, opened: Seat, active: Seat) -> Seat {
        match self {
            Self::Carry => active,
            Self::SeatOne => Seat::One,
            Self::Alternate => opened.opponent(),
        }
    }
}

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board side length, at least 1.
    board_size: usize,
    /// Scores wrap to 0 on reaching this value.
    score_ceiling: NonZeroU32,
    /// Display names for seat one and seat two.
    names: [String; 2],
    /// Seat that opens the first round.
    first_seat: Seat,
    /// Who opens rounds after a retry.
    start_policy: StartPolicy,
}

impl MatchConfig {
    /// Creates the default configuration: 3×3, ceiling 99, players `P1` and `P2`.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            score_ceiling: DEFAULT_SCORE_CEILING,
            names: ["P1".to_string(), "P2".to_string()],
            first_seat: Seat::One,
            start_policy: StartPolicy::default(),
        }
    }

    /// Sets the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Sets the score ceiling.
    pub fn with_score_ceiling(mut self, ceiling: NonZeroU32) -> Self {
        self.score_ceiling = ceiling;
        self
    }

    /// Sets the display name for `seat`.
    pub fn with_name(mut self, seat: Seat, name: impl Into<String>) -> Self {
        self.names[seat.index()] = name.into();
        self
    }

    /// Sets the seat opening the first round.
    pub fn with_first_seat(mut self, seat: Seat) -> Self {
        self.first_seat = seat;
        self
    }

    /// Sets the retry start policy.
    pub fn with_start_policy(mut self, policy: StartPolicy) -> Self {
        self.start_policy = policy;
        self
    }

    /// Display name for `seat`.
    pub fn name(&self, seat: Seat) -> &str {
        &self.names[seat.index()]
    }

    /// Checks the configuration can build a match.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("Board size must be at least 1"));
        }
        if self.names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::new("Player names must not be empty"));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a configuration error tagged with the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Players and their running scores.

use super::config::ConfigError;
use super::types::{Mark, Seat};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use tracing::{debug, instrument};

/// Default score ceiling; scores wrap back to 0 on reaching it.
pub const DEFAULT_SCORE_CEILING: NonZeroU32 = match NonZeroU32::new(99) {
    Some(ceiling) => ceiling,
    None => unreachable!(),
};

/// A player: identity plus a score that survives retries.
///
/// Name, seat and mark are fixed at construction; the only mutation is
/// [`Player::increment_score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredPlayer")]
pub struct Player {
    name: String,
    seat: Seat,
    mark: Mark,
    score: u32,
    ceiling: NonZeroU32,
}

/// Unchecked serialized form of [`Player`].
#[derive(Deserialize)]
struct StoredPlayer {
    name: String,
    seat: Seat,
    mark: Mark,
    score: u32,
    ceiling: NonZeroU32,
}

impl TryFrom<StoredPlayer> for Player {
    type Error = ConfigError;

    fn try_from(stored: StoredPlayer) -> Result<Self, Self::Error> {
        if stored.score >= stored.ceiling.get() {
            return Err(ConfigError::new(format!(
                "Score {} must be below ceiling {}",
                stored.score, stored.ceiling
            )));
        }
        Ok(Self {
            name: stored.name,
            seat: stored.seat,
            mark: stored.mark,
            score: stored.score,
            ceiling: stored.ceiling,
        })
    }
}

impl Player {
    /// Creates a player with a zero score.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, seat: Seat, mark: Mark, ceiling: NonZeroU32) -> Self {
        Self {
            name: name.as_ref().to_string(),
            seat,
            mark,
            score: 0,
            ceiling,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seat this player occupies.
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Current score, always below the ceiling.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score ceiling.
    pub fn ceiling(&self) -> NonZeroU32 {
        self.ceiling
    }

    /// Adds one win, wrapping to 0 at the ceiling.
    #[instrument(skip(self), fields(player = %self.name, score = self.score))]
    pub fn increment_score(&mut self) {
        self.score = (self.score + 1) % self.ceiling.get();
        debug!(new_score = self.score, "Score incremented");
    }
}

//! Game kinds, per-game seats, and the errors a rules engine can raise.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one played game instance (a restart gets a new one).
pub type GameId = Uuid;

/// Errors raised by the rules engines. None of them leave partial state behind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// Face not in {0, 1..=20, 25, 50} or multiplier not in 1..=3.
    InvalidThrowValue { face: u8, multiplier: u8 },
    /// Undo requested with nothing this engine can rewind.
    NoHistoryAvailable,
    /// Not enough entrants for this variant.
    InsufficientPlayers { required: usize, found: usize },
    /// Too many entrants for this variant (Football is two-sided).
    TooManyPlayers { max: usize, found: usize },
    /// The game already reached its terminal state.
    GameFinished,
    /// Preset board numbers (moon targets, pitch nodes) of the wrong count,
    /// off the 1..=20 range, or repeated where they must be distinct.
    InvalidBoardNumbers { numbers: Vec<u8> },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidThrowValue { face, multiplier } => {
                write!(f, "Invalid throw: face {} with multiplier {}", face, multiplier)
            }
            GameError::NoHistoryAvailable => write!(f, "Nothing to undo"),
            GameError::InsufficientPlayers { required, found } => {
                write!(f, "Need at least {} player(s) for this game (have {})", required, found)
            }
            GameError::TooManyPlayers { max, found } => {
                write!(f, "At most {} players can play this game (have {})", max, found)
            }
            GameError::GameFinished => write!(f, "The game is already over"),
            GameError::InvalidBoardNumbers { numbers } => {
                write!(f, "Invalid board numbers for this game: {:?}", numbers)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// The five mini-games.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    Countdown,
    MoonRace,
    AroundWorld,
    Football,
    Asteroids,
}

impl GameKind {
    /// (minimum, maximum) entrants for this variant.
    pub fn player_limits(self) -> (usize, Option<usize>) {
        match self {
            GameKind::Football => (2, Some(2)),
            _ => (1, None),
        }
    }

    /// Fail fast on a roster this variant cannot seat.
    pub fn check_player_count(self, found: usize) -> Result<(), GameError> {
        let (required, max) = self.player_limits();
        if found < required {
            return Err(GameError::InsufficientPlayers { required, found });
        }
        match max {
            Some(max) if found > max => Err(GameError::TooManyPlayers { max, found }),
            _ => Ok(()),
        }
    }
}

/// Whether a game still accepts throws.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Playing,
    Finished,
}

/// A player's seat in one game: identity, closed turns, and the variant's own fields.
///
/// `D` is what one dart records in `history` (points, faces or labels), `S` the
/// per-game payload (score, steps, progress...). Fresh for every game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Seat<S, D> {
    pub player_id: PlayerId,
    pub name: String,
    /// Closed turns, oldest first. Only appended when a turn closes.
    pub history: Vec<Vec<D>>,
    #[serde(flatten)]
    pub state: S,
}

impl<S, D> Seat<S, D> {
    pub fn with_state(player: &Player, state: S) -> Self {
        Self {
            player_id: player.id,
            name: player.name.clone(),
            history: Vec::new(),
            state,
        }
    }
}

impl<S: Default, D> Seat<S, D> {
    pub fn new(player: &Player) -> Self {
        Self::with_state(player, S::default())
    }
}

/// Tournament points one player earned from a finished game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub player_id: PlayerId,
    pub name: String,
    pub points: u32,
}

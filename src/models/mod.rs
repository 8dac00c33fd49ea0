//! Data structures for the dart party: players, throws, seats, tournament table.

mod game;
mod player;
mod throw;
mod tournament;

pub use game::{GameError, GameId, GameKind, GameStatus, Ranking, Seat};
pub use player::{Player, PlayerId};
pub use throw::{board_neighbors, Throw, DARTBOARD_ORDER, INNER_BULL, OUTER_BULL};
pub use tournament::{GameRecord, Tournament, TournamentError, TournamentId};

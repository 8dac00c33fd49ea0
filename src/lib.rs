//! Dart party scorekeeper: five mini-game rules engines feeding one tournament table.

pub mod logic;
pub mod models;

pub use logic::around_world::AroundWorld;
pub use logic::asteroids::Asteroids;
pub use logic::countdown::{Countdown, CountdownRule};
pub use logic::football::{Football, Node};
pub use logic::moon_race::{MoonRace, MoonRule};
pub use logic::turn::TurnCursor;
pub use logic::{
    credit_finished_game, leave_game, restart_game, start_game, throw_dart, undo_dart, Game,
    GameOptions, GameSession, ScoreEngine,
};
pub use models::{
    GameError, GameId, GameKind, GameRecord, GameStatus, Player, PlayerId, Ranking, Seat, Throw,
    Tournament, TournamentError, TournamentId,
};

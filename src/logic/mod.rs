//! Game rules and tournament flow: turn rotation, the five engines, ranking.

pub mod around_world;
pub mod asteroids;
pub mod countdown;
mod engine;
pub mod football;
pub mod moon_race;
mod play;
pub mod ranking;
pub mod turn;

pub use engine::{Game, GameOptions, GameSession, ScoreEngine};
pub use play::{credit_finished_game, leave_game, restart_game, start_game, throw_dart, undo_dart};

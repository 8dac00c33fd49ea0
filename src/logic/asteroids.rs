//! Asteroids: shoot each number up to three times for escalating points. A
//! bull arms a splash that makes the next dart also hit both board neighbours.

use crate::logic::engine::ScoreEngine;
use crate::logic::ranking::tiered_rankings;
use crate::logic::turn::TurnCursor;
use crate::models::{board_neighbors, GameError, GameKind, GameStatus, Player, Ranking, Seat, Throw};
use serde::{Deserialize, Serialize};

pub const MAX_ROUNDS: u32 = 4;
/// Points for the 1st, 2nd and 3rd hit on one number. A fourth hit is worth nothing.
pub const TIER_POINTS: [u32; 3] = [1, 3, 5];
/// Hits that clear a number.
pub const CLEARED: u8 = 3;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AsteroidsSeat {
    /// Hit tier per board number, `asteroids_hits[n - 1]` for number n.
    pub asteroids_hits: [u8; 20],
    pub asteroids_score: u32,
}

impl AsteroidsSeat {
    pub fn hits_on(&self, number: u8) -> u8 {
        self.asteroids_hits[usize::from(number) - 1]
    }

    /// Apply `hits` sequential hits to one number; returns the marginal points.
    fn strike(&mut self, number: u8, hits: u8) -> u32 {
        let tier = &mut self.asteroids_hits[usize::from(number) - 1];
        let mut points = 0;
        for _ in 0..hits {
            if *tier >= CLEARED {
                break;
            }
            points += TIER_POINTS[usize::from(*tier)];
            *tier += 1;
        }
        points
    }
}

/// History records dart labels.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Asteroids {
    pub players: Vec<Seat<AsteroidsSeat, String>>,
    pub cursor: TurnCursor<String>,
    pub status: GameStatus,
    /// Armed by a bull; spent by the next non-bull dart of the same turn.
    pub splash_armed: bool,
}

impl Asteroids {
    pub fn new(players: &[Player]) -> Result<Self, GameError> {
        GameKind::Asteroids.check_player_count(players.len())?;
        Ok(Self {
            players: players.iter().map(Seat::new).collect(),
            cursor: TurnCursor::new(),
            status: GameStatus::Playing,
            splash_armed: false,
        })
    }

    pub fn is_final_round(&self) -> bool {
        self.cursor.round == MAX_ROUNDS
    }

    fn shoot(&mut self, throw: Throw) -> u32 {
        if throw.is_bull() {
            self.splash_armed = true;
            return 0;
        }
        let splash = std::mem::take(&mut self.splash_armed);
        let Some(number) = throw.number() else {
            return 0;
        };
        let seat = &mut self.players[self.cursor.current_player].state;
        let mut points = seat.strike(number, throw.multiplier);
        if splash {
            if let Some((left, right)) = board_neighbors(number) {
                points += seat.strike(left, throw.multiplier);
                points += seat.strike(right, throw.multiplier);
            }
        }
        points
    }
}

impl ScoreEngine for Asteroids {
    fn handle_throw(&mut self, throw: Throw) -> Result<(), GameError> {
        if self.status == GameStatus::Finished {
            return Err(GameError::GameFinished);
        }
        let mut points = self.shoot(throw);
        if self.is_final_round() {
            points *= 2;
        }
        let idx = self.cursor.current_player;
        self.players[idx].state.asteroids_score += points;
        log::debug!("{} {} for {}", self.players[idx].name, throw.label(), points);

        if !self.cursor.record_dart(throw.label()) {
            return Ok(());
        }
        self.cursor.close_turn(&mut self.players);
        self.splash_armed = false;
        if self.cursor.is_last_player(self.players.len()) && self.cursor.round >= MAX_ROUNDS {
            self.status = GameStatus::Finished;
            log::info!("Asteroids finished after {} rounds", MAX_ROUNDS);
        } else {
            self.cursor.advance(self.players.len());
        }
        Ok(())
    }

    /// Frees the last dart slot of the open turn. Hits and points stay.
    fn undo(&mut self) -> Result<(), GameError> {
        if self.status == GameStatus::Finished {
            return Err(GameError::GameFinished);
        }
        self.cursor.pop_dart().map(|_| ()).ok_or(GameError::NoHistoryAvailable)
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn rankings(&self) -> Option<Vec<Ranking>> {
        if self.status != GameStatus::Finished {
            return None;
        }
        Some(tiered_rankings(
            self.players
                .iter()
                .map(|p| (p.player_id, p.name.as_str(), p.state.asteroids_score)),
        ))
    }
}

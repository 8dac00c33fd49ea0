//! Around the World: hit 1, then 2, then 3... doubles and triples skip ahead.

use crate::logic::engine::ScoreEngine;
use crate::logic::ranking::tiered_rankings;
use crate::logic::turn::TurnCursor;
use crate::models::{GameError, GameKind, GameStatus, Player, Ranking, Seat, Throw};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MAX_ROUNDS: u32 = 7;
pub const FINAL_NUMBER: u8 = 20;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AroundSeat {
    /// Next number to hit. Never decreases, never passes 20.
    pub around_number: u8,
    /// Round in which this player reached 20.
    pub reached_final_in: Option<u32>,
}

impl Default for AroundSeat {
    fn default() -> Self {
        Self {
            around_number: 1,
            reached_final_in: None,
        }
    }
}

/// History records dart labels (`MISS`, `5`, `D5`, `T5`...).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AroundWorld {
    pub players: Vec<Seat<AroundSeat, String>>,
    pub cursor: TurnCursor<String>,
    pub status: GameStatus,
}

impl AroundWorld {
    /// Shuffle the throwing order once, then seat everyone on 1.
    pub fn new<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> Result<Self, GameError> {
        let mut order = players.to_vec();
        order.shuffle(rng);
        Self::with_order(&order)
    }

    /// Seat players in exactly the given order.
    pub fn with_order(players: &[Player]) -> Result<Self, GameError> {
        GameKind::AroundWorld.check_player_count(players.len())?;
        Ok(Self {
            players: players.iter().map(Seat::new).collect(),
            cursor: TurnCursor::new(),
            status: GameStatus::Playing,
        })
    }

    pub fn anyone_at_final(&self) -> bool {
        self.players
            .iter()
            .any(|p| p.state.around_number >= FINAL_NUMBER)
    }
}

impl ScoreEngine for AroundWorld {
    fn handle_throw(&mut self, throw: Throw) -> Result<(), GameError> {
        if self.status == GameStatus::Finished {
            return Err(GameError::GameFinished);
        }
        let idx = self.cursor.current_player;
        let round = self.cursor.round;
        let seat = &mut self.players[idx];
        let target = seat.state.around_number;

        if target < FINAL_NUMBER && throw.number() == Some(target) {
            let next = (target + throw.multiplier).min(FINAL_NUMBER);
            seat.state.around_number = next;
            if next == FINAL_NUMBER {
                seat.state.reached_final_in = Some(round);
                log::info!("{} reached {} in round {}", seat.name, FINAL_NUMBER, round);
            }
        }

        if !self.cursor.record_dart(throw.label()) {
            return Ok(());
        }
        self.cursor.close_turn(&mut self.players);
        let round_over = self.cursor.is_last_player(self.players.len());
        if round_over && (self.cursor.round >= MAX_ROUNDS || self.anyone_at_final()) {
            self.status = GameStatus::Finished;
            log::info!("Around the World finished after round {}", self.cursor.round);
        } else {
            self.cursor.advance(self.players.len());
        }
        Ok(())
    }

    /// Frees the last dart slot of the open turn. Progress that dart made stays.
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
        Some(tiered_rankings(self.players.iter().map(|p| {
            (p.player_id, p.name.as_str(), u32::from(p.state.around_number))
        })))
    }
}

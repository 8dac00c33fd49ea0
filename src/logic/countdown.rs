//! Countdown (301): race from 301 down to zero.

use crate::logic::engine::ScoreEngine;
use crate::logic::ranking::positional_rankings;
use crate::logic::turn::TurnCursor;
use crate::models::{GameError, GameStatus, Player, Ranking, Seat, Throw};
use serde::{Deserialize, Serialize};

pub const STARTING_SCORE: i32 = 301;

/// What happens when a player reaches zero or below.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownRule {
    /// The player is finished; everyone after them in the round still throws,
    /// then the lowest score wins.
    #[default]
    RoundComplete,
    /// The game ends on the spot with the thrower as winner.
    InstantWin,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CountdownSeat {
    pub score: i32,
}

impl Default for CountdownSeat {
    fn default() -> Self {
        Self { score: STARTING_SCORE }
    }
}

/// History records the points each dart scored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    pub rule: CountdownRule,
    pub players: Vec<Seat<CountdownSeat, u32>>,
    pub cursor: TurnCursor<u32>,
    pub status: GameStatus,
}

impl Countdown {
    pub fn new(players: &[Player], rule: CountdownRule) -> Result<Self, GameError> {
        crate::models::GameKind::Countdown.check_player_count(players.len())?;
        Ok(Self {
            rule,
            players: players.iter().map(Seat::new).collect(),
            cursor: TurnCursor::new(),
            status: GameStatus::Playing,
        })
    }

    /// Someone has reached zero (the round-complete rule is waiting for the round to end).
    pub fn someone_finished(&self) -> bool {
        self.players.iter().any(|p| p.state.score <= 0)
    }

    fn finish(&mut self) {
        self.status = GameStatus::Finished;
        log::info!(
            "Countdown finished in round {}; low score {:?}",
            self.cursor.round,
            self.players.iter().map(|p| p.state.score).min()
        );
    }
}

impl ScoreEngine for Countdown {
    fn handle_throw(&mut self, throw: Throw) -> Result<(), GameError> {
        if self.status == GameStatus::Finished {
            return Err(GameError::GameFinished);
        }
        let idx = self.cursor.current_player;
        let points = throw.points();
        let seat = &mut self.players[idx];
        seat.state.score -= points as i32;
        let reached_zero = seat.state.score <= 0;
        log::debug!("{} scores {} -> {}", seat.name, points, seat.state.score);

        let full = self.cursor.record_dart(points);
        if !full && !reached_zero {
            return Ok(());
        }

        self.cursor.close_turn(&mut self.players);
        let game_over = match self.rule {
            CountdownRule::InstantWin => reached_zero,
            CountdownRule::RoundComplete => {
                self.cursor.is_last_player(self.players.len()) && self.someone_finished()
            }
        };
        if game_over {
            self.finish();
        } else {
            self.cursor.advance(self.players.len());
        }
        Ok(())
    }

    /// Fully reverses the last dart, reaching back into the previous player's
    /// last turn when the current turn is empty.
    fn undo(&mut self) -> Result<(), GameError> {
        if self.status == GameStatus::Finished {
            return Err(GameError::GameFinished);
        }
        let n = self.players.len();
        if let Some(points) = self.cursor.pop_dart() {
            self.players[self.cursor.current_player].state.score += points as i32;
            return Ok(());
        }

        let prev = self.cursor.previous_player(n);
        let seat = &mut self.players[prev];
        let mut turn = seat.history.pop().ok_or(GameError::NoHistoryAvailable)?;
        if let Some(points) = turn.pop() {
            seat.state.score += points as i32;
        }
        self.cursor.reopen_previous_turn(n, turn);
        Ok(())
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn rankings(&self) -> Option<Vec<Ranking>> {
        if self.status != GameStatus::Finished {
            return None;
        }
        Some(positional_rankings(self.players.iter().map(|p| {
            (p.player_id, p.name.as_str(), i64::from(p.state.score))
        })))
    }
}

//! Moon Race: climb ten steps by hitting your own secret number, knock rivals
//! back down by hitting theirs.

use crate::logic::engine::ScoreEngine;
use crate::logic::ranking::tiered_rankings;
use crate::logic::turn::TurnCursor;
use crate::models::{GameError, GameKind, GameStatus, Player, Ranking, Seat, Throw};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MOON_STEPS: u8 = 10;
pub const MAX_ROUNDS: u32 = 7;

/// How a Moon Race ends.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonRule {
    /// First to ten steps; no round limit.
    #[default]
    FirstToTen,
    /// Ten steps still wins outright, otherwise most steps after round 7.
    RoundCapped,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoonSeat {
    /// 1..=20, fixed for the whole game. Two players may share a number.
    pub target_number: u8,
    pub moon_steps: u8,
}

/// History records the face of each dart.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoonRace {
    pub rule: MoonRule,
    pub players: Vec<Seat<MoonSeat, u8>>,
    pub cursor: TurnCursor<u8>,
    pub status: GameStatus,
}

impl MoonRace {
    /// Draw every player's target independently and uniformly from 1..=20.
    pub fn new<R: Rng + ?Sized>(players: &[Player], rule: MoonRule, rng: &mut R) -> Result<Self, GameError> {
        let targets: Vec<u8> = players.iter().map(|_| rng.gen_range(1..=20)).collect();
        Self::with_targets(players, &targets, rule)
    }

    /// Seat players with known targets (`targets[i]` belongs to `players[i]`).
    /// Needs exactly one target per player, each in 1..=20.
    pub fn with_targets(players: &[Player], targets: &[u8], rule: MoonRule) -> Result<Self, GameError> {
        GameKind::MoonRace.check_player_count(players.len())?;
        if targets.len() != players.len() || targets.iter().any(|t| !(1..=20).contains(t)) {
            return Err(GameError::InvalidBoardNumbers {
                numbers: targets.to_vec(),
            });
        }
        let players = players
            .iter()
            .zip(targets.iter().copied())
            .map(|(p, target_number)| {
                Seat::with_state(
                    p,
                    MoonSeat {
                        target_number,
                        moon_steps: 0,
                    },
                )
            })
            .collect();
        Ok(Self {
            rule,
            players,
            cursor: TurnCursor::new(),
            status: GameStatus::Playing,
        })
    }

    fn finish(&mut self) {
        self.cursor.close_turn(&mut self.players);
        self.status = GameStatus::Finished;
        log::info!("Moon race finished in round {}", self.cursor.round);
    }
}

impl ScoreEngine for MoonRace {
    fn handle_throw(&mut self, throw: Throw) -> Result<(), GameError> {
        if self.status == GameStatus::Finished {
            return Err(GameError::GameFinished);
        }
        let idx = self.cursor.current_player;
        let face = throw.face;

        if face == self.players[idx].state.target_number {
            let me = &mut self.players[idx].state;
            me.moon_steps = (me.moon_steps + 1).min(MOON_STEPS);
        } else if throw.number().is_some() {
            // only the first rival in seat order holding that number
            let victim = self
                .players
                .iter_mut()
                .enumerate()
                .find(|(i, seat)| *i != idx && seat.state.target_number == face);
            if let Some((_, victim)) = victim {
                victim.state.moon_steps = victim.state.moon_steps.saturating_sub(1);
                log::debug!("{} knocked back to {}", victim.name, victim.state.moon_steps);
            }
        }

        let full = self.cursor.record_dart(face);
        if self.players[idx].state.moon_steps == MOON_STEPS {
            self.finish();
            return Ok(());
        }
        if full {
            self.cursor.close_turn(&mut self.players);
            let capped = self.rule == MoonRule::RoundCapped
                && self.cursor.is_last_player(self.players.len())
                && self.cursor.round >= MAX_ROUNDS;
            if capped {
                self.status = GameStatus::Finished;
                log::info!("Moon race hit the {}-round cap", MAX_ROUNDS);
            } else {
                self.cursor.advance(self.players.len());
            }
        }
        Ok(())
    }

    /// Frees the last dart slot of the open turn. Step changes that dart caused
    /// stay in place.
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
            (p.player_id, p.name.as_str(), u32::from(p.state.moon_steps))
        })))
    }
}

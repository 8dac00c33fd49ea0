//! Turn rotation shared by every game: whose turn, which dart, which round.
//!
//! The cursor never closes a turn by itself. Engines call [`TurnCursor::record_dart`],
//! decide whether the turn is over (three darts, or an early finish), and then
//! [`TurnCursor::close_turn`] + [`TurnCursor::advance`].

use crate::models::Seat;
use serde::{Deserialize, Serialize};

/// Darts in a regular turn.
pub const DARTS_PER_TURN: usize = 3;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnCursor<D> {
    pub current_player: usize,
    /// 1-based; bumps when play wraps from the last seat back to seat 0.
    pub round: u32,
    /// Darts of the open turn. Their count is the current dart index.
    pub turn_darts: Vec<D>,
}

impl<D> Default for TurnCursor<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> TurnCursor<D> {
    pub fn new() -> Self {
        Self {
            current_player: 0,
            round: 1,
            turn_darts: Vec::new(),
        }
    }

    /// How many darts the current player has thrown this turn (0, 1 or 2 between throws).
    pub fn dart_index(&self) -> usize {
        self.turn_darts.len()
    }

    /// Append a dart to the open turn. Returns true once the turn holds three darts.
    pub fn record_dart(&mut self, dart: D) -> bool {
        self.turn_darts.push(dart);
        self.turn_darts.len() >= DARTS_PER_TURN
    }

    /// Move the open turn into the current player's history.
    pub fn close_turn<S>(&mut self, seats: &mut [Seat<S, D>]) {
        let darts = std::mem::take(&mut self.turn_darts);
        if let Some(seat) = seats.get_mut(self.current_player) {
            seat.history.push(darts);
        }
    }

    /// Hand the board to the next player. Returns true when a new round starts.
    pub fn advance(&mut self, player_count: usize) -> bool {
        self.current_player = (self.current_player + 1) % player_count.max(1);
        if self.current_player == 0 {
            self.round += 1;
            return true;
        }
        false
    }

    /// True when the current player is the last seat of the round.
    pub fn is_last_player(&self, player_count: usize) -> bool {
        self.current_player + 1 == player_count
    }

    /// Remove the last dart of the open turn.
    pub fn pop_dart(&mut self) -> Option<D> {
        self.turn_darts.pop()
    }

    pub fn previous_player(&self, player_count: usize) -> usize {
        let n = player_count.max(1);
        (self.current_player + n - 1) % n
    }

    /// Step back into the previous player's turn with `darts` still open.
    pub fn reopen_previous_turn(&mut self, player_count: usize, darts: Vec<D>) {
        if self.current_player == 0 && self.round > 1 {
            self.round -= 1;
        }
        self.current_player = self.previous_player(player_count);
        self.turn_darts = darts;
    }
}

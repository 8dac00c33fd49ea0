//! Player identity as seen by the tournament table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (ledger key; names are display only).
pub type PlayerId = Uuid;

/// A player entered in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Points collected across all finished games of this session.
    pub tournament_points: u32,
}

impl Player {
    /// Create a new player with the given name and zero tournament points.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tournament_points: 0,
        }
    }

    /// Credit points won in one game.
    pub fn add_points(&mut self, points: u32) {
        self.tournament_points += points;
    }
}

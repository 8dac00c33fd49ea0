//! Tournament table: who is playing, their points, finished games, and the game in progress.

use crate::logic::GameSession;
use crate::models::game::{GameError, GameId, GameKind, Ranking};
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// A player with this exact name already exists (names are case-sensitive).
    DuplicatePlayerName,
    /// Player not found in the table.
    PlayerNotFound(PlayerId),
    /// The action needs a game in progress.
    NoActiveGame,
    /// The action is not allowed while a game is in progress.
    GameInProgress,
    /// These rankings were already credited.
    RankingsAlreadyApplied(GameId),
    /// The rules engine rejected the action.
    Game(GameError),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyPlayerName => write!(f, "Player name cannot be empty"),
            TournamentError::DuplicatePlayerName => write!(f, "A player with this name already exists"),
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::NoActiveGame => write!(f, "No game in progress"),
            TournamentError::GameInProgress => write!(f, "Not allowed while a game is in progress"),
            TournamentError::RankingsAlreadyApplied(id) => {
                write!(f, "Results of game {} were already counted", id)
            }
            TournamentError::Game(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<GameError> for TournamentError {
    fn from(e: GameError) -> Self {
        TournamentError::Game(e)
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// A finished game as counted in the table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: GameId,
    pub kind: GameKind,
    pub finished_at: DateTime<Utc>,
    pub rankings: Vec<Ranking>,
}

/// Session-long tournament state. Lives in memory only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Players in the order they were added.
    pub players: Vec<Player>,
    /// Finished games, oldest first.
    pub results: Vec<GameRecord>,
    /// Game currently being played, if any.
    pub active_game: Option<GameSession>,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

impl Tournament {
    /// Create an empty tournament.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            players: Vec::new(),
            results: Vec::new(),
            active_game: None,
        }
    }

    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Add a player. Names are trimmed, must be non-empty and unique (exact match).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, TournamentError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        if self.players.iter().any(|p| p.name == name_trimmed) {
            return Err(TournamentError::DuplicatePlayerName);
        }
        let player = Player::new(name_trimmed);
        let id = player.id;
        log::info!("Player {} joined the tournament", player.name);
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player and their points. Not allowed mid-game.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), TournamentError> {
        if self.active_game.is_some() {
            return Err(TournamentError::GameInProgress);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        let removed = self.players.remove(idx);
        log::info!(
            "Player {} left the tournament with {} point(s)",
            removed.name,
            removed.tournament_points
        );
        Ok(())
    }

    /// Drop every player, result and the game in progress.
    pub fn reset_all(&mut self) {
        self.players.clear();
        self.results.clear();
        self.active_game = None;
        log::info!("Tournament {} reset", self.id);
    }

    /// Credit one finished game's rankings. Each game id counts once.
    ///
    /// Rankings naming players no longer in the table are skipped.
    pub fn apply_rankings(
        &mut self,
        game_id: GameId,
        kind: GameKind,
        rankings: Vec<Ranking>,
    ) -> Result<(), TournamentError> {
        if self.results.iter().any(|r| r.game_id == game_id) {
            return Err(TournamentError::RankingsAlreadyApplied(game_id));
        }
        for ranking in &rankings {
            match self.get_player_mut(ranking.player_id) {
                Some(p) => p.add_points(ranking.points),
                None => log::warn!("Skipping points for {}: no longer in the tournament", ranking.name),
            }
        }
        self.results.push(GameRecord {
            game_id,
            kind,
            finished_at: Utc::now(),
            rankings,
        });
        Ok(())
    }

    /// Players by tournament points, highest first (ties keep join order).
    pub fn standings(&self) -> Vec<&Player> {
        let mut sorted: Vec<&Player> = self.players.iter().collect();
        sorted.sort_by(|a, b| b.tournament_points.cmp(&a.tournament_points));
        sorted
    }
}

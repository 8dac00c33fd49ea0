//! The engine seam: one trait every rules engine implements, the tagged union
//! of the five games, and the session that owns a game plus its random source.

use crate::logic::around_world::AroundWorld;
use crate::logic::asteroids::Asteroids;
use crate::logic::countdown::{Countdown, CountdownRule};
use crate::logic::football::Football;
use crate::logic::moon_race::{MoonRace, MoonRule};
use crate::models::{GameError, GameId, GameKind, GameStatus, Player, Ranking, Throw};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rules engine. Each call is one transaction: on `Err` nothing changed.
pub trait ScoreEngine {
    fn handle_throw(&mut self, throw: Throw) -> Result<(), GameError>;

    /// Rewind the last dart. `NoHistoryAvailable` when there is nothing this
    /// engine is able to rewind.
    fn undo(&mut self) -> Result<(), GameError>;

    fn status(&self) -> GameStatus;

    /// Tournament points per player; `None` until the game is finished.
    fn rankings(&self) -> Option<Vec<Ranking>>;
}

/// Options picked when a game is started. Every field has a default.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameOptions {
    #[serde(default)]
    pub countdown_rule: CountdownRule,
    #[serde(default)]
    pub moon_rule: MoonRule,
    /// Fixed seed for target/number/order draws; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// One running game, whichever kind it is.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Game {
    Countdown(Countdown),
    MoonRace(MoonRace),
    AroundWorld(AroundWorld),
    Football(Football),
    Asteroids(Asteroids),
}

impl Game {
    /// Seat `players` in a fresh game of `kind`, drawing any randomness from `rng`.
    pub fn start(
        kind: GameKind,
        players: &[Player],
        options: &GameOptions,
        rng: &mut StdRng,
    ) -> Result<Self, GameError> {
        Ok(match kind {
            GameKind::Countdown => Game::Countdown(Countdown::new(players, options.countdown_rule)?),
            GameKind::MoonRace => Game::MoonRace(MoonRace::new(players, options.moon_rule, rng)?),
            GameKind::AroundWorld => Game::AroundWorld(AroundWorld::new(players, rng)?),
            GameKind::Football => Game::Football(Football::new(players, rng)?),
            GameKind::Asteroids => Game::Asteroids(Asteroids::new(players)?),
        })
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Game::Countdown(_) => GameKind::Countdown,
            Game::MoonRace(_) => GameKind::MoonRace,
            Game::AroundWorld(_) => GameKind::AroundWorld,
            Game::Football(_) => GameKind::Football,
            Game::Asteroids(_) => GameKind::Asteroids,
        }
    }

    pub fn engine(&self) -> &dyn ScoreEngine {
        match self {
            Game::Countdown(g) => g,
            Game::MoonRace(g) => g,
            Game::AroundWorld(g) => g,
            Game::Football(g) => g,
            Game::Asteroids(g) => g,
        }
    }

    pub fn engine_mut(&mut self) -> &mut dyn ScoreEngine {
        match self {
            Game::Countdown(g) => g,
            Game::MoonRace(g) => g,
            Game::AroundWorld(g) => g,
            Game::Football(g) => g,
            Game::Asteroids(g) => g,
        }
    }
}

fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

/// A started game together with its roster snapshot, options and random source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    pub game_id: GameId,
    pub options: GameOptions,
    /// Roster at start, in the order given (engines may reorder their seats).
    pub entrants: Vec<Player>,
    pub game: Game,
    /// Set once this game's rankings went into the tournament table.
    pub credited: bool,
    #[serde(skip, default = "entropy_rng")]
    rng: StdRng,
}

impl GameSession {
    pub fn start(kind: GameKind, entrants: Vec<Player>, options: GameOptions) -> Result<Self, GameError> {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let game = Game::start(kind, &entrants, &options, &mut rng)?;
        log::info!("Started {:?} with {} player(s)", kind, entrants.len());
        Ok(Self {
            game_id: Uuid::new_v4(),
            options,
            entrants,
            game,
            credited: false,
            rng,
        })
    }

    pub fn kind(&self) -> GameKind {
        self.game.kind()
    }

    pub fn status(&self) -> GameStatus {
        self.game.engine().status()
    }

    pub fn is_finished(&self) -> bool {
        self.status() == GameStatus::Finished
    }

    /// Validate and apply one dart.
    pub fn throw(&mut self, face: u8, multiplier: u8) -> Result<(), GameError> {
        let throw = Throw::new(face, multiplier)?;
        log::debug!("{:?} throw {}", self.kind(), throw.label());
        self.game.engine_mut().handle_throw(throw)
    }

    /// Undo the last dart. Having nothing to undo, or a game that is already
    /// over, is not an error here: the state is left as it is.
    pub fn undo(&mut self) -> Result<(), GameError> {
        match self.game.engine_mut().undo() {
            Err(GameError::NoHistoryAvailable) => {
                log::debug!("Undo ignored: nothing to undo");
                Ok(())
            }
            Err(GameError::GameFinished) => {
                log::debug!("Undo ignored: {:?} is already finished", self.kind());
                Ok(())
            }
            other => other,
        }
    }

    /// Throw the current game away and start the same kind again with fresh draws.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let kind = self.kind();
        self.game = Game::start(kind, &self.entrants, &self.options, &mut self.rng)?;
        self.game_id = Uuid::new_v4();
        self.credited = false;
        log::info!("Restarted {:?}", kind);
        Ok(())
    }

    pub fn rankings(&self) -> Option<Vec<Ranking>> {
        self.game.engine().rankings()
    }
}

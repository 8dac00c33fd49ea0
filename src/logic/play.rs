//! Tournament-level game flow: start a game from the table, feed it darts, and
//! credit the table once the game ends.

use crate::logic::engine::{GameOptions, GameSession};
use crate::models::{GameKind, Tournament, TournamentError};

/// Start a game of `kind` with every player currently in the table.
pub fn start_game(
    tournament: &mut Tournament,
    kind: GameKind,
    options: GameOptions,
) -> Result<(), TournamentError> {
    if tournament.active_game.is_some() {
        return Err(TournamentError::GameInProgress);
    }
    let session = GameSession::start(kind, tournament.players.clone(), options)?;
    tournament.active_game = Some(session);
    Ok(())
}

fn active_session(tournament: &mut Tournament) -> Result<&mut GameSession, TournamentError> {
    tournament
        .active_game
        .as_mut()
        .ok_or(TournamentError::NoActiveGame)
}

/// Throw one dart in the active game. If it ends the game, the rankings go
/// into the table right away.
pub fn throw_dart(tournament: &mut Tournament, face: u8, multiplier: u8) -> Result<(), TournamentError> {
    let session = active_session(tournament)?;
    session.throw(face, multiplier)?;
    credit_finished_game(tournament)
}

/// Credit the active game's rankings if it is finished and not yet counted.
pub fn credit_finished_game(tournament: &mut Tournament) -> Result<(), TournamentError> {
    let Some(session) = tournament.active_game.as_mut() else {
        return Ok(());
    };
    if session.credited {
        return Ok(());
    }
    let Some(rankings) = session.rankings() else {
        return Ok(());
    };
    session.credited = true;
    let (game_id, kind) = (session.game_id, session.kind());
    tournament.apply_rankings(game_id, kind, rankings)
}

/// Undo the last dart of the active game (no-op when there is nothing to undo).
pub fn undo_dart(tournament: &mut Tournament) -> Result<(), TournamentError> {
    active_session(tournament)?.undo()?;
    Ok(())
}

/// Restart the active game with fresh random draws.
pub fn restart_game(tournament: &mut Tournament) -> Result<(), TournamentError> {
    active_session(tournament)?.restart()?;
    Ok(())
}

/// Leave the active game (finished or not) and go back to the table.
pub fn leave_game(tournament: &mut Tournament) -> Result<(), TournamentError> {
    let session = tournament
        .active_game
        .take()
        .ok_or(TournamentError::NoActiveGame)?;
    if !session.is_finished() {
        log::info!("Abandoned {:?} without a result", session.kind());
    }
    Ok(())
}

//! Integration tests for Countdown (301): scoring, turn rotation, both finishing rules, undo.

use dart_party::{Countdown, CountdownRule, GameError, GameStatus, Player, ScoreEngine, Throw};

fn players(names: &[&str]) -> Vec<Player> {
    names.iter().map(|n| Player::new(*n)).collect()
}

fn throw(game: &mut Countdown, face: u8, multiplier: u8) {
    game.handle_throw(Throw::new(face, multiplier).unwrap()).unwrap();
}

#[test]
fn score_is_301_minus_accepted_points() {
    let mut game = Countdown::new(&players(&["Ann", "Bo"]), CountdownRule::RoundComplete).unwrap();
    let darts = [(20, 3), (5, 1), (0, 1), (19, 2), (25, 1), (50, 1)];
    for &(face, m) in &darts {
        throw(&mut game, face, m);
    }
    assert_eq!(game.players[0].state.score, 301 - 60 - 5);
    assert_eq!(game.players[1].state.score, 301 - 38 - 25 - 50);
    assert_eq!(game.cursor.current_player, 0);
    assert_eq!(game.cursor.round, 2);
}

#[test]
fn ann_scores_sixty_and_history_holds_the_turn() {
    let mut game = Countdown::new(&players(&["Ann", "Bo"]), CountdownRule::RoundComplete).unwrap();
    throw(&mut game, 20, 1);
    throw(&mut game, 20, 1);
    assert!(game.players[0].history.is_empty(), "history only grows at turn close");
    throw(&mut game, 20, 1);
    assert_eq!(game.players[0].state.score, 241);
    assert_eq!(game.players[0].history, vec![vec![20, 20, 20]]);
    assert_eq!(game.cursor.current_player, 1);
    assert_eq!(game.cursor.dart_index(), 0);
}

#[test]
fn triple_then_misses_records_points_per_dart() {
    let mut game = Countdown::new(&players(&["Ann", "Bo"]), CountdownRule::RoundComplete).unwrap();
    throw(&mut game, 20, 3);
    // multiplier is per dart: the next single 0 is a plain miss
    throw(&mut game, 0, 3);
    throw(&mut game, 0, 1);
    assert_eq!(game.players[0].state.score, 241);
    assert_eq!(game.players[0].history, vec![vec![60, 0, 0]]);
}

#[test]
fn round_complete_lets_the_rest_of_the_round_throw() {
    let mut game = Countdown::new(&players(&["Ann", "Bo", "Cy"]), CountdownRule::RoundComplete).unwrap();
    game.players[1].state.score = 40;
    throw(&mut game, 0, 1);
    throw(&mut game, 0, 1);
    throw(&mut game, 0, 1);

    // Bo finishes on the second dart; turn closes early
    throw(&mut game, 20, 1);
    throw(&mut game, 20, 1);
    assert_eq!(game.players[1].history, vec![vec![20, 20]]);
    assert_eq!(game.cursor.current_player, 2);
    assert_eq!(game.status, GameStatus::Playing);

    throw(&mut game, 20, 3);
    throw(&mut game, 20, 3);
    throw(&mut game, 20, 3);
    assert_eq!(game.status, GameStatus::Finished);

    let rankings = game.rankings().unwrap();
    let points: Vec<_> = rankings.iter().map(|r| (r.name.as_str(), r.points)).collect();
    assert_eq!(points, vec![("Bo", 10), ("Cy", 5), ("Ann", 2)]);
}

#[test]
fn instant_win_ends_on_the_finishing_dart() {
    let mut game = Countdown::new(&players(&["Ann", "Bo"]), CountdownRule::InstantWin).unwrap();
    game.players[0].state.score = 10;
    throw(&mut game, 20, 1);
    assert_eq!(game.status, GameStatus::Finished);
    assert_eq!(game.players[0].state.score, -10);
    assert_eq!(game.cursor.current_player, 0);
    assert_eq!(game.players[0].history, vec![vec![20]]);
    assert_eq!(game.rankings().unwrap()[0].name, "Ann");
    assert_eq!(
        game.handle_throw(Throw::single(5).unwrap()),
        Err(GameError::GameFinished)
    );
}

#[test]
fn tied_scores_still_get_flat_positional_points() {
    let mut game = Countdown::new(&players(&["Ann", "Bo", "Cy", "Di"]), CountdownRule::InstantWin).unwrap();
    game.players[1].state.score = 100;
    game.players[2].state.score = 100;
    game.players[0].state.score = 3;
    throw(&mut game, 3, 1);
    let points: Vec<_> = game.rankings().unwrap().iter().map(|r| r.points).collect();
    assert_eq!(points, vec![10, 5, 2, 0]);
}

#[test]
fn undo_within_turn_restores_previous_state() {
    let mut game = Countdown::new(&players(&["Ann", "Bo"]), CountdownRule::RoundComplete).unwrap();
    throw(&mut game, 7, 1);
    let before = game.clone();
    throw(&mut game, 18, 3);
    game.undo().unwrap();
    assert_eq!(game, before);
}

#[test]
fn undo_reaches_back_into_previous_players_turn() {
    let mut game = Countdown::new(&players(&["Ann", "Bo"]), CountdownRule::RoundComplete).unwrap();
    throw(&mut game, 20, 1);
    throw(&mut game, 19, 1);
    throw(&mut game, 18, 1);
    assert_eq!(game.cursor.current_player, 1);

    game.undo().unwrap();
    assert_eq!(game.cursor.current_player, 0);
    assert_eq!(game.cursor.turn_darts, vec![20, 19]);
    assert_eq!(game.cursor.dart_index(), 2);
    assert!(game.players[0].history.is_empty());
    assert_eq!(game.players[0].state.score, 301 - 39);
}

#[test]
fn undo_across_a_round_boundary_steps_the_round_back() {
    let mut game = Countdown::new(&players(&["Ann", "Bo"]), CountdownRule::RoundComplete).unwrap();
    for _ in 0..6 {
        throw(&mut game, 1, 1);
    }
    assert_eq!((game.cursor.current_player, game.cursor.round), (0, 2));
    game.undo().unwrap();
    assert_eq!((game.cursor.current_player, game.cursor.round), (1, 1));
    assert_eq!(game.players[1].state.score, 299);
}

#[test]
fn undo_with_nothing_thrown_reports_no_history() {
    let mut game = Countdown::new(&players(&["Ann", "Bo"]), CountdownRule::RoundComplete).unwrap();
    let before = game.clone();
    assert_eq!(game.undo(), Err(GameError::NoHistoryAvailable));
    assert_eq!(game, before);
}

#[test]
fn needs_at_least_one_player() {
    assert!(matches!(
        Countdown::new(&[], CountdownRule::RoundComplete),
        Err(GameError::InsufficientPlayers { required: 1, found: 0 })
    ));
}

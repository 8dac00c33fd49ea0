//! Integration tests for Moon Race: steps, sabotage, both ending rules, tiered points.

use dart_party::{GameError, GameStatus, MoonRace, MoonRule, Player, ScoreEngine, Throw};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn players(names: &[&str]) -> Vec<Player> {
    names.iter().map(|n| Player::new(*n)).collect()
}

fn throw(game: &mut MoonRace, face: u8) {
    game.handle_throw(Throw::single(face).unwrap()).unwrap();
}

#[test]
fn own_number_climbs_one_step_per_hit() {
    let mut game = MoonRace::with_targets(&players(&["Ann"]), &[7], MoonRule::FirstToTen).unwrap();
    let mut steps = Vec::new();
    for _ in 0..3 {
        throw(&mut game, 7);
        steps.push(game.players[0].state.moon_steps);
    }
    assert_eq!(steps, vec![1, 2, 3]);
    assert_eq!(game.players[0].history, vec![vec![7, 7, 7]]);
}

#[test]
fn hitting_a_rivals_number_knocks_them_back_but_not_below_zero() {
    let mut game =
        MoonRace::with_targets(&players(&["Ann", "Bo"]), &[7, 12], MoonRule::FirstToTen).unwrap();
    game.players[1].state.moon_steps = 1;
    throw(&mut game, 12);
    assert_eq!(game.players[1].state.moon_steps, 0);
    throw(&mut game, 12);
    assert_eq!(game.players[1].state.moon_steps, 0);
    throw(&mut game, 3);
    assert_eq!(game.players[0].state.moon_steps, 0);
}

#[test]
fn shared_targets_count_as_own_hit_for_the_thrower() {
    let mut game =
        MoonRace::with_targets(&players(&["Ann", "Bo", "Cy"]), &[5, 5, 9], MoonRule::FirstToTen).unwrap();
    game.players[1].state.moon_steps = 4;
    throw(&mut game, 5);
    assert_eq!(game.players[0].state.moon_steps, 1);
    assert_eq!(game.players[1].state.moon_steps, 4);
}

#[test]
fn only_the_first_rival_on_the_hit_number_loses_a_step() {
    let mut game =
        MoonRace::with_targets(&players(&["Ann", "Bo", "Cy"]), &[1, 5, 5], MoonRule::FirstToTen).unwrap();
    game.players[1].state.moon_steps = 2;
    game.players[2].state.moon_steps = 3;
    throw(&mut game, 5);
    assert_eq!(game.players[1].state.moon_steps, 1);
    assert_eq!(game.players[2].state.moon_steps, 3);
}

#[test]
fn preset_targets_must_cover_every_player_and_stay_on_the_board() {
    let roster = players(&["Ann", "Bo", "Cy"]);
    assert_eq!(
        MoonRace::with_targets(&roster, &[4], MoonRule::FirstToTen),
        Err(GameError::InvalidBoardNumbers { numbers: vec![4] })
    );
    assert_eq!(
        MoonRace::with_targets(&roster, &[4, 0, 21], MoonRule::FirstToTen),
        Err(GameError::InvalidBoardNumbers { numbers: vec![4, 0, 21] })
    );
    let game = MoonRace::with_targets(&roster, &[4, 20, 1], MoonRule::FirstToTen).unwrap();
    assert_eq!(game.players.len(), 3);
}

#[test]
fn tenth_step_wins_immediately_and_ties_share_points() {
    let mut game =
        MoonRace::with_targets(&players(&["Ann", "Bo", "Cy"]), &[7, 8, 9], MoonRule::FirstToTen).unwrap();
    game.players[0].state.moon_steps = 9;
    game.players[1].state.moon_steps = 4;
    game.players[2].state.moon_steps = 4;
    throw(&mut game, 7);
    assert_eq!(game.status, GameStatus::Finished);
    assert_eq!(game.players[0].state.moon_steps, 10);
    assert_eq!(game.players[0].history, vec![vec![7]]);

    let rankings = game.rankings().unwrap();
    let points: Vec<_> = rankings.iter().map(|r| (r.name.as_str(), r.points)).collect();
    assert_eq!(points, vec![("Ann", 10), ("Bo", 5), ("Cy", 5)]);
    assert_eq!(game.handle_throw(Throw::single(7).unwrap()), Err(GameError::GameFinished));
}

#[test]
fn round_capped_rule_stops_after_seven_rounds() {
    let mut game =
        MoonRace::with_targets(&players(&["Ann", "Bo"]), &[7, 8], MoonRule::RoundCapped).unwrap();
    for round in 1..=7 {
        assert_eq!(game.cursor.round, round);
        for face in [7, 0, 0, 0, 0, 0] {
            throw(&mut game, face);
        }
    }
    assert_eq!(game.status, GameStatus::Finished);
    assert_eq!(game.players[0].state.moon_steps, 7);
    let rankings = game.rankings().unwrap();
    assert_eq!((rankings[0].name.as_str(), rankings[0].points), ("Ann", 10));
    assert_eq!((rankings[1].name.as_str(), rankings[1].points), ("Bo", 5));
}

#[test]
fn first_to_ten_has_no_round_cap() {
    let mut game = MoonRace::with_targets(&players(&["Ann"]), &[7], MoonRule::FirstToTen).unwrap();
    for _ in 0..30 {
        throw(&mut game, 0);
    }
    assert_eq!(game.status, GameStatus::Playing);
    assert_eq!(game.cursor.round, 11);
}

#[test]
fn undo_only_frees_the_dart_slot() {
    let mut game = MoonRace::with_targets(&players(&["Ann", "Bo"]), &[7, 8], MoonRule::FirstToTen).unwrap();
    throw(&mut game, 7);
    game.undo().unwrap();
    assert_eq!(game.cursor.dart_index(), 0);
    // the step stays: this engine does not reverse dart effects
    assert_eq!(game.players[0].state.moon_steps, 1);
    assert_eq!(game.undo(), Err(GameError::NoHistoryAvailable));
}

#[test]
fn random_targets_are_on_the_board_and_reproducible() {
    let roster = players(&["Ann", "Bo", "Cy", "Di"]);
    let a = MoonRace::new(&roster, MoonRule::FirstToTen, &mut StdRng::seed_from_u64(3)).unwrap();
    let b = MoonRace::new(&roster, MoonRule::FirstToTen, &mut StdRng::seed_from_u64(3)).unwrap();
    for (x, y) in a.players.iter().zip(&b.players) {
        assert!((1..=20).contains(&x.state.target_number));
        assert_eq!(x.state.target_number, y.state.target_number);
    }
}

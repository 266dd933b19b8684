#![allow(dead_code)]

use skullking_core::Game;
use skullking_types::BonusKind;

/// Creates a game with the given player names and blank rounds
pub fn create_game(names: &[&str], round_count: usize) -> Game {
    Game::with_players(names.iter().copied(), round_count)
}

/// Creates a standard test game with 2 players and 3 rounds
pub fn create_standard_game() -> Game {
    create_game(&["Alice", "Bob"], 3)
}

/// Records a bid and result for one player in one round
pub fn play(game: &mut Game, round: usize, player: usize, bid: u32, actual: u32) {
    game.set_bid(round, player, bid).unwrap();
    game.set_actual(round, player, actual).unwrap();
}

/// Credits bonuses one click at a time
pub fn award(game: &mut Game, round: usize, player: usize, bonuses: &[BonusKind]) {
    for kind in bonuses {
        game.increment_bonus(round, player, *kind).unwrap();
    }
}

/// Sets up the worked example: Alice scores 60, -20 and 70 over three rounds
pub fn create_scenario_game() -> Game {
    let mut game = create_standard_game();
    play(&mut game, 0, 0, 3, 3);
    play(&mut game, 1, 0, 0, 1);
    play(&mut game, 2, 0, 2, 2);
    award(&mut game, 2, 0, &[BonusKind::Pirate]);
    game
}

/// Cumulative totals for every player through `upto`
pub fn cumulative_row(game: &Game, upto: usize) -> Vec<i32> {
    (0..game.players().len())
        .map(|player| game.cumulative_score(player, upto).unwrap())
        .collect()
}

/// Asserts every round has one record per player
pub fn assert_aligned(game: &Game) {
    for (index, round) in game.rounds().iter().enumerate() {
        assert_eq!(
            round.records.len(),
            game.players().len(),
            "Round {} has {} records for {} players",
            index + 1,
            round.records.len(),
            game.players().len()
        );
    }
}

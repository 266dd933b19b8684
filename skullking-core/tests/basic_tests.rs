mod common;

use common::*;
use skullking_core::Game;
use skullking_types::{BonusKind, PlayerRoundRecord, ScoreError};

#[test]
fn test_scenario_round_scores() {
    let game = create_scenario_game();
    assert_eq!(game.score(0, 0).unwrap(), 60);
    assert_eq!(game.score(1, 0).unwrap(), -20);
    assert_eq!(game.score(2, 0).unwrap(), 70);
}

#[test]
fn test_scenario_cumulative_with_ignore_toggle() {
    let mut game = create_scenario_game();
    assert_eq!(game.cumulative_score(0, 2).unwrap(), 110);

    game.set_ignored(1, true).unwrap();
    assert_eq!(game.cumulative_score(0, 2).unwrap(), 130);
    // Earlier totals are not affected by a later ignored round
    assert_eq!(game.cumulative_score(0, 0).unwrap(), 60);

    game.set_ignored(1, false).unwrap();
    assert_eq!(game.cumulative_score(0, 2).unwrap(), 110);
}

#[test]
fn test_untouched_player_scores_zero_bids() {
    let game = create_scenario_game();
    // Bob never entered anything: 10 + 20 + 30
    assert_eq!(cumulative_row(&game, 2), vec![110, 60]);
}

#[test]
fn test_new_player_joins_every_round() {
    let mut game = create_scenario_game();
    let index = game.add_player("Carol").unwrap();

    assert_eq!(index, 2);
    assert_aligned(&game);
    for round in game.rounds() {
        assert_eq!(round.records[2], PlayerRoundRecord::default());
    }
    assert_eq!(game.cumulative_score(2, 0).unwrap(), 10);
    // Existing players are unchanged
    assert_eq!(cumulative_row(&game, 2)[..2], [110, 60]);
}

#[test]
fn test_removing_player_keeps_remaining_scores() {
    let mut game = create_game(&["Alice", "Bob", "Carol"], 2);
    play(&mut game, 0, 2, 2, 2);
    play(&mut game, 1, 2, 1, 0);
    let carol_id = game.players()[2].id;
    let before = game.cumulative_score(2, 1).unwrap();

    let removed = game.remove_player(0).unwrap();
    assert_eq!(removed.name, "Alice");
    assert_aligned(&game);

    let carol = game.player_index_of(carol_id).unwrap();
    assert_eq!(carol, 1);
    assert_eq!(game.cumulative_score(carol, 1).unwrap(), before);
    assert_eq!(game.players()[0].name, "Bob");
}

#[test]
fn test_round_id_survives_player_changes() {
    let mut game = create_standard_game();
    let id = game.rounds()[2].id;
    game.add_player("Carol").unwrap();
    game.remove_player(0).unwrap();
    assert_eq!(game.round_index_of(id), Some(2));
}

#[test]
fn test_bonus_edits_on_ignored_round_are_not_observable() {
    let mut game = create_scenario_game();
    game.set_ignored(2, true).unwrap();
    let before = *game.record(2, 0).unwrap();

    assert_eq!(game.increment_bonus(2, 0, BonusKind::Pirate).unwrap(), 1);
    assert_eq!(*game.record(2, 0).unwrap(), before);

    game.set_ignored(2, false).unwrap();
    assert_eq!(game.score(2, 0).unwrap(), 70);
}

#[test]
fn test_text_entry_is_clamped() {
    let mut game = create_standard_game();
    assert_eq!(game.set_bid_text(0, 1, "4").unwrap(), 4);
    assert_eq!(game.set_actual_text(0, 1, "lots").unwrap(), 0);
    assert_eq!(game.score(0, 1).unwrap(), -40);
}

#[test]
fn test_out_of_range_fails_fast() {
    let mut game = create_standard_game();
    let before = game.snapshot();

    assert_eq!(
        game.set_bid(3, 0, 1),
        Err(ScoreError::RoundIndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        game.cumulative_score(2, 0),
        Err(ScoreError::PlayerIndexOutOfRange { index: 2, len: 2 })
    );
    assert!(game.rename_player(5, "Ghost").is_err());
    assert!(game.remove_player(2).is_err());
    assert!(game.set_ignored(10, true).is_err());

    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_navigation_skips_ignored_rounds() {
    let mut game = Game::with_defaults();
    game.set_ignored(1, true).unwrap();
    game.set_ignored(2, true).unwrap();

    assert_eq!(game.find_next_active_round(0), Some(3));
    assert_eq!(game.find_previous_active_round(3), Some(0));
    assert_eq!(game.find_next_active_round(9), None);
}

#[test]
fn test_scoreboard_renders_names_after_rename() {
    let mut game = create_scenario_game();
    game.rename_player(1, "Robert").unwrap();

    let board = game.scoreboard();
    assert_eq!(board[0].rows[1].name, "Robert");
    assert_eq!(board[2].rows[0].cumulative, 110);
    assert_eq!(game.standings()[0].name, "Alice");
}

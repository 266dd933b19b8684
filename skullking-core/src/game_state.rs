use skullking_types::{
    BonusKind, GameSnapshot, Player, PlayerId, PlayerRoundRecord, Round, RoundId, RoundView,
    ScoreBreakdown, ScoreError, ScoreRow, Standing,
};
use tracing::info;

use crate::scoring::saturate;
use crate::{RosterModel, RoundModel, ScoringEngine};

pub const DEFAULT_PLAYERS: [&str; 2] = ["Alice", "Bob"];
pub const DEFAULT_ROUNDS: usize = 10;

/// A score sheet: the roster plus its rounds.
///
/// The two models are private so players and rounds can only change through
/// the operations below, which keep every round's records aligned with the roster.
#[derive(Debug, Clone)]
pub struct Game {
    roster: RosterModel,
    rounds: RoundModel,
    created_at: String,
}

impl Game {
    /// An empty sheet with no players and no rounds
    pub fn new() -> Self {
        Self {
            roster: RosterModel::new(),
            rounds: RoundModel::new(0),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// A sheet pre-seeded with the given players and `round_count` blank rounds
    pub fn with_players<I, S>(names: I, round_count: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roster = RosterModel::from_names(names);
        let mut game = Self {
            rounds: RoundModel::new(roster.len()),
            roster,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        for _ in 0..round_count {
            game.add_round();
        }
        info!(
            "Created score sheet with {} players and {} rounds",
            game.roster.len(),
            game.rounds.len()
        );
        game
    }

    /// Two players and ten rounds, ready for a standard game
    pub fn with_defaults() -> Self {
        Self::with_players(DEFAULT_PLAYERS, DEFAULT_ROUNDS)
    }

    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    pub fn rounds(&self) -> &[Round] {
        self.rounds.rounds()
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn record(
        &self,
        round_index: usize,
        player_index: usize,
    ) -> Result<&PlayerRoundRecord, ScoreError> {
        self.rounds.record(round_index, player_index)
    }

    pub fn compute_score(record: &PlayerRoundRecord, round_index: usize) -> i32 {
        ScoringEngine::compute_score(record, round_index)
    }

    pub fn score(&self, round_index: usize, player_index: usize) -> Result<i32, ScoreError> {
        self.rounds.score(round_index, player_index)
    }

    pub fn breakdown(
        &self,
        round_index: usize,
        player_index: usize,
    ) -> Result<ScoreBreakdown, ScoreError> {
        let record = self.rounds.record(round_index, player_index)?;
        Ok(ScoringEngine::breakdown(record, round_index))
    }

    pub fn cumulative_score(&self, player_index: usize, upto: usize) -> Result<i32, ScoreError> {
        self.rounds.cumulative_score(player_index, upto)
    }

    pub fn find_previous_active_round(&self, from: usize) -> Option<usize> {
        self.rounds.find_previous_active_round(from)
    }

    pub fn find_next_active_round(&self, from: usize) -> Option<usize> {
        self.rounds.find_next_active_round(from)
    }

    pub fn player_index_of(&self, id: PlayerId) -> Option<usize> {
        self.roster.player_index_of(id)
    }

    pub fn round_index_of(&self, id: RoundId) -> Option<usize> {
        self.rounds.round_index_of(id)
    }

    pub fn default_player_name(&self) -> String {
        self.roster.default_player_name()
    }

    /// Returns the new player's index
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<usize, ScoreError> {
        self.roster.add_player(name, &mut self.rounds)
    }

    pub fn rename_player(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), ScoreError> {
        self.roster.rename_player(index, name)
    }

    pub fn remove_player(&mut self, index: usize) -> Result<Player, ScoreError> {
        self.roster.remove_player(index, &mut self.rounds)
    }

    /// Returns the new round's index
    pub fn add_round(&mut self) -> usize {
        self.rounds.add_round()
    }

    pub fn set_ignored(&mut self, round_index: usize, ignored: bool) -> Result<(), ScoreError> {
        self.rounds.set_ignored(round_index, ignored)
    }

    pub fn set_bid(
        &mut self,
        round_index: usize,
        player_index: usize,
        value: u32,
    ) -> Result<(), ScoreError> {
        self.rounds.set_bid(round_index, player_index, value)
    }

    pub fn set_actual(
        &mut self,
        round_index: usize,
        player_index: usize,
        value: u32,
    ) -> Result<(), ScoreError> {
        self.rounds.set_actual(round_index, player_index, value)
    }

    pub fn set_bid_text(
        &mut self,
        round_index: usize,
        player_index: usize,
        text: &str,
    ) -> Result<u32, ScoreError> {
        self.rounds.set_bid_text(round_index, player_index, text)
    }

    pub fn set_actual_text(
        &mut self,
        round_index: usize,
        player_index: usize,
        text: &str,
    ) -> Result<u32, ScoreError> {
        self.rounds.set_actual_text(round_index, player_index, text)
    }

    pub fn increment_bonus(
        &mut self,
        round_index: usize,
        player_index: usize,
        kind: BonusKind,
    ) -> Result<u32, ScoreError> {
        self.rounds.increment_bonus(round_index, player_index, kind)
    }

    /// Every round with per-player scores and running totals
    pub fn scoreboard(&self) -> Vec<RoundView> {
        let players = self.roster.players();
        let mut running = vec![0i64; players.len()];

        self.rounds
            .rounds()
            .iter()
            .enumerate()
            .map(|(index, round)| {
                let rows = players
                    .iter()
                    .zip(&round.records)
                    .zip(running.iter_mut())
                    .map(|((player, record), total)| {
                        let score = ScoringEngine::compute_score(record, index);
                        if !round.ignored {
                            *total += i64::from(score);
                        }
                        ScoreRow {
                            player_id: player.id,
                            name: player.name.clone(),
                            bid: record.bid,
                            actual: record.actual,
                            bonuses: record.bonuses,
                            score,
                            cumulative: saturate(*total),
                        }
                    })
                    .collect();

                RoundView {
                    id: round.id,
                    index,
                    number: index + 1,
                    ignored: round.ignored,
                    rows,
                }
            })
            .collect()
    }

    /// A single round of the scoreboard
    pub fn round_view(&self, round_index: usize) -> Result<RoundView, ScoreError> {
        let len = self.rounds.len();
        self.scoreboard()
            .into_iter()
            .nth(round_index)
            .ok_or(ScoreError::RoundIndexOutOfRange {
                index: round_index,
                len,
            })
    }

    /// Totals through the last round, in roster order
    pub fn totals(&self) -> Vec<i32> {
        self.rounds.totals()
    }

    /// Players ranked by total, highest first; ties keep roster order
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .roster
            .players()
            .iter()
            .zip(self.totals())
            .map(|(player, total)| Standing {
                player_id: player.id,
                name: player.name.clone(),
                total,
            })
            .collect();
        standings.sort_by(|a, b| b.total.cmp(&a.total));
        standings
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.roster.players().to_vec(),
            rounds: self.rounds.rounds().to_vec(),
            scoreboard: self.scoreboard(),
            standings: self.standings(),
            created_at: self.created_at.clone(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

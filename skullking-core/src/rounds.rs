use skullking_types::{BonusKind, PlayerRoundRecord, Round, RoundId, ScoreError};
use tracing::{debug, info};

use crate::ScoringEngine;
use crate::input::parse_count;
use crate::scoring::saturate;

/// Ordered rounds, each holding one record per roster position.
///
/// Every round always has exactly `player_count` records. Column
/// insert/remove validate the index first and then touch every round, so a
/// rejected call leaves all rounds as they were. Only `Game` builds one, so its
/// width always matches the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundModel {
    rounds: Vec<Round>,
    player_count: usize,
}

impl RoundModel {
    pub(crate) fn new(player_count: usize) -> Self {
        Self {
            rounds: Vec::new(),
            player_count,
        }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn round(&self, round_index: usize) -> Result<&Round, ScoreError> {
        self.rounds
            .get(round_index)
            .ok_or(ScoreError::RoundIndexOutOfRange {
                index: round_index,
                len: self.rounds.len(),
            })
    }

    pub fn record(
        &self,
        round_index: usize,
        player_index: usize,
    ) -> Result<&PlayerRoundRecord, ScoreError> {
        let round = self.round(round_index)?;
        round
            .records
            .get(player_index)
            .ok_or(ScoreError::PlayerIndexOutOfRange {
                index: player_index,
                len: round.records.len(),
            })
    }

    fn record_mut(
        &mut self,
        round_index: usize,
        player_index: usize,
    ) -> Result<&mut PlayerRoundRecord, ScoreError> {
        let len = self.rounds.len();
        let round = self
            .rounds
            .get_mut(round_index)
            .ok_or(ScoreError::RoundIndexOutOfRange {
                index: round_index,
                len,
            })?;
        let width = round.records.len();
        round
            .records
            .get_mut(player_index)
            .ok_or(ScoreError::PlayerIndexOutOfRange {
                index: player_index,
                len: width,
            })
    }

    /// Append a round with a zero record for every current player.
    /// Returns the new round's index.
    pub fn add_round(&mut self) -> usize {
        self.rounds.push(Round::new(self.player_count));
        let index = self.rounds.len() - 1;
        info!("Added round {} for {} players", index + 1, self.player_count);
        index
    }

    pub fn set_ignored(&mut self, round_index: usize, ignored: bool) -> Result<(), ScoreError> {
        let len = self.rounds.len();
        let round = self
            .rounds
            .get_mut(round_index)
            .ok_or(ScoreError::RoundIndexOutOfRange {
                index: round_index,
                len,
            })?;
        round.ignored = ignored;
        debug!("Round {} ignored = {}", round_index + 1, ignored);
        Ok(())
    }

    pub fn set_bid(
        &mut self,
        round_index: usize,
        player_index: usize,
        value: u32,
    ) -> Result<(), ScoreError> {
        self.record_mut(round_index, player_index)?.bid = value;
        debug!(
            "Round {} player {} bid = {}",
            round_index + 1,
            player_index,
            value
        );
        Ok(())
    }

    pub fn set_actual(
        &mut self,
        round_index: usize,
        player_index: usize,
        value: u32,
    ) -> Result<(), ScoreError> {
        self.record_mut(round_index, player_index)?.actual = value;
        debug!(
            "Round {} player {} actual = {}",
            round_index + 1,
            player_index,
            value
        );
        Ok(())
    }

    /// Store a bid typed as text; malformed text is stored as 0
    pub fn set_bid_text(
        &mut self,
        round_index: usize,
        player_index: usize,
        text: &str,
    ) -> Result<u32, ScoreError> {
        let value = parse_count(text);
        self.set_bid(round_index, player_index, value)?;
        Ok(value)
    }

    /// Store an actual trick count typed as text; malformed text is stored as 0
    pub fn set_actual_text(
        &mut self,
        round_index: usize,
        player_index: usize,
        text: &str,
    ) -> Result<u32, ScoreError> {
        let value = parse_count(text);
        self.set_actual(round_index, player_index, value)?;
        Ok(value)
    }

    /// Advance a bonus tally with wraparound and return the resulting count.
    /// Ignored rounds are left untouched and report their stored count.
    pub fn increment_bonus(
        &mut self,
        round_index: usize,
        player_index: usize,
        kind: BonusKind,
    ) -> Result<u32, ScoreError> {
        let ignored = self.round(round_index)?.ignored;
        let record = self.record_mut(round_index, player_index)?;
        if ignored {
            debug!(
                "Ignoring {} bonus edit on ignored round {}",
                kind,
                round_index + 1
            );
            return Ok(record.bonuses.count(kind));
        }

        let count = record.bonuses.increment(kind);
        debug!(
            "Round {} player {} {} = {}",
            round_index + 1,
            player_index,
            kind,
            count
        );
        Ok(count)
    }

    /// Give every round a zero record at `player_index`; valid positions are `0..=player_count`
    pub fn insert_player_column(&mut self, player_index: usize) -> Result<(), ScoreError> {
        if player_index > self.player_count {
            return Err(ScoreError::PlayerIndexOutOfRange {
                index: player_index,
                len: self.player_count,
            });
        }

        for round in &mut self.rounds {
            round
                .records
                .insert(player_index, PlayerRoundRecord::default());
        }
        self.player_count += 1;
        Ok(())
    }

    /// Drop the record at `player_index` from every round
    pub fn remove_player_column(&mut self, player_index: usize) -> Result<(), ScoreError> {
        if player_index >= self.player_count {
            return Err(ScoreError::PlayerIndexOutOfRange {
                index: player_index,
                len: self.player_count,
            });
        }

        for round in &mut self.rounds {
            round.records.remove(player_index);
        }
        self.player_count -= 1;
        Ok(())
    }

    /// Nearest non-ignored round strictly before `from`
    pub fn find_previous_active_round(&self, from: usize) -> Option<usize> {
        let end = from.min(self.rounds.len());
        (0..end).rev().find(|&i| !self.rounds[i].ignored)
    }

    /// Nearest non-ignored round strictly after `from`
    pub fn find_next_active_round(&self, from: usize) -> Option<usize> {
        (from.saturating_add(1)..self.rounds.len()).find(|&i| !self.rounds[i].ignored)
    }

    pub fn round_index_of(&self, id: RoundId) -> Option<usize> {
        self.rounds.iter().position(|round| round.id == id)
    }

    pub fn score(&self, round_index: usize, player_index: usize) -> Result<i32, ScoreError> {
        let record = self.record(round_index, player_index)?;
        Ok(ScoringEngine::compute_score(record, round_index))
    }

    pub fn cumulative_score(&self, player_index: usize, upto: usize) -> Result<i32, ScoreError> {
        if player_index >= self.player_count {
            return Err(ScoreError::PlayerIndexOutOfRange {
                index: player_index,
                len: self.player_count,
            });
        }
        ScoringEngine::cumulative_score(&self.rounds, player_index, upto)
    }

    /// Totals through the last round, one per player in roster order
    pub fn totals(&self) -> Vec<i32> {
        let mut totals = vec![0i64; self.player_count];
        for (round_index, round) in self.rounds.iter().enumerate() {
            if round.ignored {
                continue;
            }
            for (total, record) in totals.iter_mut().zip(&round.records) {
                *total += i64::from(ScoringEngine::compute_score(record, round_index));
            }
        }
        totals.into_iter().map(saturate).collect()
    }
}

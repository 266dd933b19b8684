use skullking_types::{BonusTally, PlayerRoundRecord, Round, ScoreBreakdown, ScoreError};

pub struct ScoringEngine;

impl ScoringEngine {
    /// Score one player's round. `round_index` is 0-based and scales zero bids.
    pub fn compute_score(record: &PlayerRoundRecord, round_index: usize) -> i32 {
        Self::breakdown(record, round_index).total()
    }

    /// Base points, recorded bonus points, and whether the bonus counts
    pub fn breakdown(record: &PlayerRoundRecord, round_index: usize) -> ScoreBreakdown {
        let bid = record.bid as i64;
        let actual = record.actual as i64;
        let made = record.made_bid();

        let base = if bid == 0 {
            // Zero bids are worth more the later the round
            let stake = (round_index as i64 + 1) * 10;
            if made { stake } else { -stake }
        } else if made {
            20 * bid
        } else {
            -10 * (bid - actual).abs()
        };

        ScoreBreakdown {
            base: saturate(base),
            bonus: Self::bonus_points(&record.bonuses),
            bonus_awarded: made,
        }
    }

    /// Raw bonus value of a tally, without the exact-bid check
    pub fn bonus_points(bonuses: &BonusTally) -> i32 {
        bonuses.total_points()
    }

    /// Sum of round scores for one player over rounds `0..=upto`, skipping ignored rounds.
    pub fn cumulative_score(
        rounds: &[Round],
        player_index: usize,
        upto: usize,
    ) -> Result<i32, ScoreError> {
        if upto >= rounds.len() {
            return Err(ScoreError::RoundIndexOutOfRange {
                index: upto,
                len: rounds.len(),
            });
        }

        let mut total: i64 = 0;
        for (round_index, round) in rounds[..=upto].iter().enumerate() {
            let record = round.records.get(player_index).ok_or(
                ScoreError::PlayerIndexOutOfRange {
                    index: player_index,
                    len: round.records.len(),
                },
            )?;
            if round.ignored {
                continue;
            }
            total += Self::compute_score(record, round_index) as i64;
        }

        Ok(saturate(total))
    }
}

pub(crate) fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

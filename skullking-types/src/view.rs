use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{BonusTally, Player, PlayerId, Round, RoundId};

/// How a single round score was assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub base: i32,
    /// Bonus points recorded, whether or not they counted
    pub bonus: i32,
    /// Bonus only counts on an exact bid
    pub bonus_awarded: bool,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        if self.bonus_awarded {
            self.base.saturating_add(self.bonus)
        } else {
            self.base
        }
    }
}

/// One player's line in a rendered round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRow {
    pub player_id: PlayerId,
    pub name: String,
    pub bid: u32,
    pub actual: u32,
    pub bonuses: BonusTally,
    pub score: i32,
    /// Running total through this round, skipping ignored rounds
    pub cumulative: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundView {
    pub id: RoundId,
    pub index: usize,
    /// 1-based number shown to players
    pub number: usize,
    pub ignored: bool,
    pub rows: Vec<ScoreRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub total: i32,
}

/// Full read-only copy of a game for rendering surfaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSnapshot {
    pub players: Vec<Player>,
    pub rounds: Vec<Round>,
    pub scoreboard: Vec<RoundView>,
    pub standings: Vec<Standing>,
    pub created_at: String, // ISO 8601 string
}

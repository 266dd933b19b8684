use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::{BonusTally, RoundId};

/// One player's inputs for one round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayerRoundRecord {
    pub bid: u32,
    pub actual: u32,
    pub bonuses: BonusTally,
}

impl PlayerRoundRecord {
    pub fn new(bid: u32, actual: u32) -> Self {
        Self {
            bid,
            actual,
            bonuses: BonusTally::default(),
        }
    }

    pub fn made_bid(&self) -> bool {
        self.bid == self.actual
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Round {
    pub id: RoundId,
    /// Excluded from cumulative totals; records are kept as entered
    pub ignored: bool,
    /// Index-aligned with the roster
    pub records: Vec<PlayerRoundRecord>,
}

impl Round {
    /// A fresh round with one zero record per player
    pub fn new(player_count: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            ignored: false,
            records: vec![PlayerRoundRecord::default(); player_count],
        }
    }
}

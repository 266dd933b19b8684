use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::ScoreError;

/// A bonus-scoring event a player can collect during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BonusKind {
    #[serde(rename = "mermaid")]
    Mermaid,
    #[serde(rename = "pirate")]
    Pirate,
    #[serde(rename = "skullking")]
    SkullKing,
    #[serde(rename = "nonTrump14")]
    NonTrump14,
    #[serde(rename = "trump14")]
    Trump14,
}

impl BonusKind {
    /// Every kind, in display order
    pub const ALL: [BonusKind; 5] = [
        BonusKind::Mermaid,
        BonusKind::Pirate,
        BonusKind::SkullKing,
        BonusKind::NonTrump14,
        BonusKind::Trump14,
    ];

    /// Points credited per occurrence
    pub fn points(self) -> i32 {
        match self {
            BonusKind::Mermaid => 20,
            BonusKind::Pirate => 30,
            BonusKind::SkullKing => 40,
            BonusKind::NonTrump14 => 10,
            BonusKind::Trump14 => 20,
        }
    }

    /// Highest count a tally can hold before wrapping back to zero
    pub fn cap(self) -> u32 {
        match self {
            BonusKind::Mermaid => 2,
            BonusKind::Pirate => 6,
            BonusKind::SkullKing => 1,
            BonusKind::NonTrump14 => 3,
            BonusKind::Trump14 => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BonusKind::Mermaid => "mermaid",
            BonusKind::Pirate => "pirate",
            BonusKind::SkullKing => "skullking",
            BonusKind::NonTrump14 => "nonTrump14",
            BonusKind::Trump14 => "trump14",
        }
    }

    /// Short glyph used by score sheets
    pub fn label(self) -> &'static str {
        match self {
            BonusKind::Mermaid => "🧜",
            BonusKind::Pirate => "⚔️",
            BonusKind::SkullKing => "☠️",
            BonusKind::NonTrump14 => "🔸14",
            BonusKind::Trump14 => "🏴‍☠️14",
        }
    }
}

impl fmt::Display for BonusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BonusKind {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BonusKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScoreError::UnknownBonusKind {
                name: wanted.to_string(),
            })
    }
}

/// Per-player bonus counts for one round. Always carries all five kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BonusTally {
    pub mermaid: u32,
    pub pirate: u32,
    #[serde(rename = "skullking")]
    pub skull_king: u32,
    #[serde(rename = "nonTrump14")]
    pub non_trump14: u32,
    pub trump14: u32,
}

impl BonusTally {
    pub fn count(&self, kind: BonusKind) -> u32 {
        match kind {
            BonusKind::Mermaid => self.mermaid,
            BonusKind::Pirate => self.pirate,
            BonusKind::SkullKing => self.skull_king,
            BonusKind::NonTrump14 => self.non_trump14,
            BonusKind::Trump14 => self.trump14,
        }
    }

    fn slot_mut(&mut self, kind: BonusKind) -> &mut u32 {
        match kind {
            BonusKind::Mermaid => &mut self.mermaid,
            BonusKind::Pirate => &mut self.pirate,
            BonusKind::SkullKing => &mut self.skull_king,
            BonusKind::NonTrump14 => &mut self.non_trump14,
            BonusKind::Trump14 => &mut self.trump14,
        }
    }

    /// Advance one kind by one, wrapping to zero past its cap.
    /// A count already above the cap is treated as full. Returns the new count.
    pub fn increment(&mut self, kind: BonusKind) -> u32 {
        let cap = kind.cap();
        let slot = self.slot_mut(kind);
        *slot = ((*slot).min(cap) + 1) % (cap + 1);
        *slot
    }

    /// Sum of `count * points` over every kind, ignoring eligibility.
    /// Saturates at the `i32` bounds.
    pub fn total_points(&self) -> i32 {
        let total: i64 = BonusKind::ALL
            .into_iter()
            .map(|kind| i64::from(self.count(kind)) * i64::from(kind.points()))
            .sum();
        total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    pub fn is_empty(&self) -> bool {
        BonusKind::ALL.into_iter().all(|kind| self.count(kind) == 0)
    }

    /// Iterate `(kind, count)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (BonusKind, u32)> + '_ {
        BonusKind::ALL.into_iter().map(move |kind| (kind, self.count(kind)))
    }
}

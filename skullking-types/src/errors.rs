use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Failures the core reports instead of silently coercing.
/// These point at a caller holding a stale or invalid index, not at bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ScoreError {
    #[error("player index {index} out of range (roster has {len} players)")]
    PlayerIndexOutOfRange { index: usize, len: usize },
    #[error("round index {index} out of range (game has {len} rounds)")]
    RoundIndexOutOfRange { index: usize, len: usize },
    #[error("roster has {players} players but rounds hold {columns} records each")]
    PlayerCountMismatch { players: usize, columns: usize },
    #[error("unknown bonus kind: {name}")]
    UnknownBonusKind { name: String },
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::PlayerId;

/// A roster entry. Scoring identifies players by roster position;
/// `id` only lets a caller find the same player again after the roster shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

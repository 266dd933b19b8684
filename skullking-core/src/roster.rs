use skullking_types::{Player, PlayerId, ScoreError};
use tracing::{debug, info};

use crate::RoundModel;

/// Ordered player list. Position is identity for scoring, so every
/// structural change is mirrored into the round model in the same call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterModel {
    players: Vec<Player>,
}

impl RosterModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn player(&self, index: usize) -> Result<&Player, ScoreError> {
        self.players
            .get(index)
            .ok_or(ScoreError::PlayerIndexOutOfRange {
                index,
                len: self.players.len(),
            })
    }

    /// Placeholder name for a newly added player
    pub fn default_player_name(&self) -> String {
        format!("Player {}", self.players.len() + 1)
    }

    /// Build a roster from names without touching any rounds
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: names.into_iter().map(Player::new).collect(),
        }
    }

    fn check_aligned(&self, rounds: &RoundModel) -> Result<(), ScoreError> {
        if rounds.player_count() != self.players.len() {
            return Err(ScoreError::PlayerCountMismatch {
                players: self.players.len(),
                columns: rounds.player_count(),
            });
        }
        Ok(())
    }

    /// Append a player and back-fill zero records in every existing round.
    /// Returns the new player's index.
    pub(crate) fn add_player(
        &mut self,
        name: impl Into<String>,
        rounds: &mut RoundModel,
    ) -> Result<usize, ScoreError> {
        self.check_aligned(rounds)?;

        let index = self.players.len();
        rounds.insert_player_column(index)?;
        let player = Player::new(name);
        info!("Added player '{}' at position {}", player.name, index);
        self.players.push(player);
        Ok(index)
    }

    /// Names are display-only; round data is untouched
    pub fn rename_player(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), ScoreError> {
        let len = self.players.len();
        let player = self
            .players
            .get_mut(index)
            .ok_or(ScoreError::PlayerIndexOutOfRange { index, len })?;
        player.name = name.into();
        debug!("Renamed player {} to '{}'", index, player.name);
        Ok(())
    }

    /// Remove a player and its record in every round. Later players shift
    /// down by one, so callers must re-resolve any index they were holding.
    pub(crate) fn remove_player(
        &mut self,
        index: usize,
        rounds: &mut RoundModel,
    ) -> Result<Player, ScoreError> {
        self.check_aligned(rounds)?;
        if index >= self.players.len() {
            return Err(ScoreError::PlayerIndexOutOfRange {
                index,
                len: self.players.len(),
            });
        }

        rounds.remove_player_column(index)?;
        let player = self.players.remove(index);
        info!("Removed player '{}' from position {}", player.name, index);
        Ok(player)
    }

    pub fn player_index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|player| player.id == id)
    }
}

use anyhow::{Context, Result};
use skullking_core::Game;
use tracing::debug;

use crate::commands::{Command, HELP};
use crate::config::Config;
use crate::render;

/// What the read loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

/// Owns the score sheet for one terminal session and re-renders after every change
pub struct Session {
    game: Game,
    echo_json: bool,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            game: Game::with_players(config.players.iter().cloned(), config.initial_rounds),
            echo_json: config.echo_json,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn handle(&mut self, command: Command) -> Result<Outcome> {
        debug!("Handling {:?}", command);

        let text = match command {
            Command::Players => render::render_players(self.game.players()),
            Command::Rounds => render::render_round_list(&self.game.scoreboard()),
            Command::Show { round: None } => render::render_board(&self.game.scoreboard()),
            Command::Show { round: Some(round) } => self.render_one(round)?,
            Command::Json => self.json()?,
            Command::Standings => render::render_standings(&self.game.standings()),
            Command::AddPlayer { name } => {
                let name = name.unwrap_or_else(|| self.game.default_player_name());
                self.game.add_player(name)?;
                self.after_change(render::render_players(self.game.players()))?
            }
            Command::Rename { player, name } => {
                self.game.rename_player(player, name)?;
                self.after_change(render::render_players(self.game.players()))?
            }
            Command::RemovePlayer { player } => {
                let removed = self.game.remove_player(player)?;
                let text = format!(
                    "removed {}\n{}",
                    removed.name,
                    render::render_players(self.game.players())
                );
                self.after_change(text)?
            }
            Command::AddRound => {
                let round = self.game.add_round();
                let text = self.render_one(round)?;
                self.after_change(text)?
            }
            Command::Ignore { round } => {
                self.game.set_ignored(round, true)?;
                let text = self.render_one(round)?;
                self.after_change(text)?
            }
            Command::Include { round } => {
                self.game.set_ignored(round, false)?;
                let text = self.render_one(round)?;
                self.after_change(text)?
            }
            Command::Bid {
                round,
                player,
                value,
            } => {
                self.game.set_bid_text(round, player, &value)?;
                let text = self.render_one(round)?;
                self.after_change(text)?
            }
            Command::Actual {
                round,
                player,
                value,
            } => {
                self.game.set_actual_text(round, player, &value)?;
                let text = self.render_one(round)?;
                self.after_change(text)?
            }
            Command::Bonus {
                round,
                player,
                kind,
            } => {
                self.game.increment_bonus(round, player, kind)?;
                let text = self.render_one(round)?;
                self.after_change(text)?
            }
            Command::Next { round } => self.navigate(self.game.find_next_active_round(round))?,
            Command::Prev { round } => {
                self.navigate(self.game.find_previous_active_round(round))?
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Output(text))
    }

    fn render_one(&self, round: usize) -> Result<String> {
        Ok(render::render_round(&self.game.round_view(round)?))
    }

    fn navigate(&self, target: Option<usize>) -> Result<String> {
        match target {
            Some(round) => self.render_one(round),
            None => Ok("no active round in that direction".to_string()),
        }
    }

    fn json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.game.snapshot()).context("Failed to serialize game")
    }

    fn after_change(&self, text: String) -> Result<String> {
        if self.echo_json {
            Ok(format!("{}\n{}", text, self.json()?))
        } else {
            Ok(text)
        }
    }
}

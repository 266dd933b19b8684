use anyhow::{Context, Result};
use std::env;

use skullking_core::{DEFAULT_PLAYERS, DEFAULT_ROUNDS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub players: Vec<String>,
    pub initial_rounds: usize,
    pub echo_json: bool,
}

impl Config {
    /// Read settings from the environment, falling back to the standard sheet
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let players = match lookup("SKULLKING_PLAYERS") {
            Some(raw) => parse_players(&raw),
            None => DEFAULT_PLAYERS.iter().map(|name| name.to_string()).collect(),
        };

        let initial_rounds = match lookup("SKULLKING_ROUNDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid SKULLKING_ROUNDS: {raw:?}"))?,
            None => DEFAULT_ROUNDS,
        };

        let echo_json = match lookup("SKULLKING_JSON") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid SKULLKING_JSON: {raw:?}"))?,
            None => false,
        };

        Ok(Self {
            players,
            initial_rounds,
            echo_json,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS.iter().map(|name| name.to_string()).collect(),
            initial_rounds: DEFAULT_ROUNDS,
            echo_json: false,
        }
    }
}

fn parse_players(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.players, vec!["Alice", "Bob"]);
        assert_eq!(config.initial_rounds, 10);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SKULLKING_PLAYERS", " Ann, Ben ,,Cy "),
            ("SKULLKING_ROUNDS", "4"),
            ("SKULLKING_JSON", "true"),
        ]))
        .unwrap();
        assert_eq!(config.players, vec!["Ann", "Ben", "Cy"]);
        assert_eq!(config.initial_rounds, 4);
        assert!(config.echo_json);
    }

    #[test]
    fn test_empty_player_list_is_allowed() {
        let config = Config::from_lookup(lookup_from(&[("SKULLKING_PLAYERS", "")])).unwrap();
        assert!(config.players.is_empty());
    }

    #[test]
    fn test_bad_numbers_are_errors() {
        let err = Config::from_lookup(lookup_from(&[("SKULLKING_ROUNDS", "many")])).unwrap_err();
        assert!(err.to_string().contains("Invalid SKULLKING_ROUNDS"));

        let err = Config::from_lookup(lookup_from(&[("SKULLKING_JSON", "yes")])).unwrap_err();
        assert!(err.to_string().contains("Invalid SKULLKING_JSON"));
    }
}

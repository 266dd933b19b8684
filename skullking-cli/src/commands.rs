use anyhow::{Context, Result, anyhow, bail};
use skullking_types::BonusKind;

/// A single line of user input. Round and player positions are stored
/// 0-based; the command line uses 1-based numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Players,
    Rounds,
    Show { round: Option<usize> },
    Json,
    Standings,
    AddPlayer { name: Option<String> },
    Rename { player: usize, name: String },
    RemovePlayer { player: usize },
    AddRound,
    Ignore { round: usize },
    Include { round: usize },
    Bid { round: usize, player: usize, value: String },
    Actual { round: usize, player: usize, value: String },
    Bonus { round: usize, player: usize, kind: BonusKind },
    Next { round: usize },
    Prev { round: usize },
    Help,
    Quit,
}

pub const HELP: &str = "\
commands (rounds and players are numbered from 1):
  players | rounds | show [round] | json | standings
  add-player [name] | rename <player> <name> | remove-player <player>
  add-round | ignore <round> | include <round>
  bid <round> <player> <value> | actual <round> <player> <value>
  bonus <round> <player> <mermaid|pirate|skullking|nonTrump14|trump14>
  next <round> | prev <round>
  help | quit";

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match verb.to_ascii_lowercase().as_str() {
        "players" => Command::Players,
        "rounds" => Command::Rounds,
        "show" => Command::Show {
            round: args.first().map(|raw| position(raw, "round")).transpose()?,
        },
        "json" => Command::Json,
        "standings" => Command::Standings,
        "add-player" => Command::AddPlayer {
            name: (!rest.is_empty()).then(|| rest.to_string()),
        },
        "rename" => {
            let (player, name) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("usage: rename <player> <name>"))?;
            Command::Rename {
                player: position(player, "player")?,
                name: name.trim().to_string(),
            }
        }
        "remove-player" => Command::RemovePlayer {
            player: position(arg(&args, 0, "player")?, "player")?,
        },
        "add-round" => Command::AddRound,
        "ignore" => Command::Ignore {
            round: position(arg(&args, 0, "round")?, "round")?,
        },
        "include" => Command::Include {
            round: position(arg(&args, 0, "round")?, "round")?,
        },
        "bid" | "actual" => {
            let round = position(arg(&args, 0, "round")?, "round")?;
            let player = position(arg(&args, 1, "player")?, "player")?;
            // Missing or malformed values are stored as 0, like an empty field
            let value = args.get(2).copied().unwrap_or("").to_string();
            if verb.eq_ignore_ascii_case("bid") {
                Command::Bid { round, player, value }
            } else {
                Command::Actual { round, player, value }
            }
        }
        "bonus" => Command::Bonus {
            round: position(arg(&args, 0, "round")?, "round")?,
            player: position(arg(&args, 1, "player")?, "player")?,
            kind: arg(&args, 2, "bonus kind")?.parse()?,
        },
        "next" => Command::Next {
            round: position(arg(&args, 0, "round")?, "round")?,
        },
        "prev" => Command::Prev {
            round: position(arg(&args, 0, "round")?, "round")?,
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command '{other}' (try 'help')"),
    };

    Ok(Some(command))
}

fn arg<'a>(args: &[&'a str], index: usize, what: &str) -> Result<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| anyhow!("missing {what}"))
}

/// Convert a 1-based number from the command line to a 0-based index
fn position(raw: &str, what: &str) -> Result<usize> {
    let number: usize = raw
        .parse()
        .with_context(|| format!("invalid {what} number '{raw}'"))?;
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow!("{what} numbers start at 1"))
}

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use skullking_cli::{Config, Outcome, Session, parse_command};

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the score sheet on stdout
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Starting score sheet with {} players and {} rounds",
        config.players.len(),
        config.initial_rounds
    );

    let mut session = Session::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Skull King score sheet. Type 'help' for commands.")?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;

        match parse_command(&line).and_then(|command| match command {
            Some(command) => session.handle(command).map(Some),
            None => Ok(None),
        }) {
            Ok(Some(Outcome::Output(text))) => writeln!(stdout, "{text}")?,
            Ok(Some(Outcome::Quit)) => break,
            Ok(None) => {}
            Err(e) => {
                warn!("Command '{}' failed: {:#}", line.trim(), e);
                writeln!(stdout, "error: {e:#}")?;
            }
        }
        prompt(&mut stdout)?;
    }

    info!("Score sheet closed");
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

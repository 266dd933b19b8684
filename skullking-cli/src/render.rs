use skullking_types::{BonusTally, Player, RoundView, Standing};

pub fn render_players(players: &[Player]) -> String {
    if players.is_empty() {
        return "no players".to_string();
    }
    players
        .iter()
        .enumerate()
        .map(|(index, player)| format!("{:>3}. {}", index + 1, player.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per round: number, status and each player's running total
pub fn render_round_list(board: &[RoundView]) -> String {
    if board.is_empty() {
        return "no rounds".to_string();
    }
    board
        .iter()
        .map(|view| {
            let totals = view
                .rows
                .iter()
                .map(|row| format!("{} {}", row.name, row.cumulative))
                .collect::<Vec<_>>()
                .join(", ");
            let status = if view.ignored { "ignored" } else { "active" };
            format!("Round {:>2} [{}] {}", view.number, status, totals)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_round(view: &RoundView) -> String {
    let status = if view.ignored { " (ignored)" } else { "" };
    let name_width = view
        .rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let header = format!(
        "{:<name_width$}  {:>3}  {:>6}  {:>5}  {:>10}  Bonuses",
        "Player", "Bid", "Actual", "Score", "Cumulative"
    );
    let rows = view.rows.iter().map(|row| {
        format!(
            "{:<name_width$}  {:>3}  {:>6}  {:>5}  {:>10}  {}",
            row.name,
            row.bid,
            row.actual,
            row.score,
            row.cumulative,
            render_bonuses(&row.bonuses)
        )
    });

    [format!("Round {}{}", view.number, status), header]
        .into_iter()
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_board(board: &[RoundView]) -> String {
    if board.is_empty() {
        return "no rounds".to_string();
    }
    board
        .iter()
        .map(render_round)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_standings(standings: &[Standing]) -> String {
    if standings.is_empty() {
        return "no players".to_string();
    }
    standings
        .iter()
        .enumerate()
        .map(|(place, standing)| format!("{:>3}. {} {}", place + 1, standing.name, standing.total))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Non-zero tallies as `label×count`, or `-` when there are none
pub fn render_bonuses(bonuses: &BonusTally) -> String {
    if bonuses.is_empty() {
        return "-".to_string();
    }
    bonuses
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(kind, count)| format!("{}×{}", kind.label(), count))
        .collect::<Vec<_>>()
        .join(" ")
}

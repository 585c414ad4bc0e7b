//! Text rendering of the ranked board, as shown on the menu screen.

use survivor_common::LeaderboardEntry;

const NAME_COLUMN_WIDTH: usize = 15;
pub const EMPTY_BOARD_MESSAGE: &str = "No scores yet. Be the first!";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardRow {
    pub rank: usize,
    pub badge: String,
    pub player_name: String,
    pub score: String,
    pub time: String,
}

impl BoardRow {
    /// Top three get a highlight colour in the game UI.
    pub fn is_podium(&self) -> bool {
        self.rank <= 3
    }
}

/// Rows in board order. Entries are expected to arrive already ranked.
pub fn board_rows(entries: &[LeaderboardEntry]) -> Vec<BoardRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let rank = i + 1;
            BoardRow {
                rank,
                badge: rank_badge(rank),
                player_name: entry.player_name.chars().take(NAME_COLUMN_WIDTH).collect(),
                score: group_thousands(entry.score),
                time: format_survival_time(entry.survival_time),
            }
        })
        .collect()
}

pub fn rank_badge(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => n.to_string(),
    }
}

/// `m:ss`, seconds rounded down.
pub fn format_survival_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn render_board(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::from("🏆 TOP SURVIVORS 🏆\n");
    out.push_str(&format!(
        "{:<6}{:<w$}  {:>13}  {:>6}\n",
        "Rank",
        "Player",
        "Score",
        "Time",
        w = NAME_COLUMN_WIDTH
    ));

    if entries.is_empty() {
        out.push_str(EMPTY_BOARD_MESSAGE);
        out.push('\n');
        return out;
    }

    for row in board_rows(entries) {
        out.push_str(&format!(
            "{:<6}{:<w$}  {:>13}  {:>6}\n",
            row.badge,
            row.player_name,
            row.score,
            row.time,
            w = NAME_COLUMN_WIDTH
        ));
    }
    out
}

//! Output formats for a fetched record.

use std::fmt::Write;

use crossterm::style::{Color, Stylize};
use ffstalk_core::AccountRecord;

use crate::table::Table;

/// Which renderer to use. `--json` wins over `--table`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Table,
    Summary,
}

impl OutputMode {
    pub fn from_flags(json: bool, table: bool) -> Self {
        if json {
            Self::Json
        } else if table {
            Self::Table
        } else {
            Self::Summary
        }
    }

    pub fn render(self, record: &AccountRecord) -> serde_json::Result<String> {
        match self {
            Self::Json => json(record),
            Self::Table => Ok(table(record)),
            Self::Summary => Ok(summary(record)),
        }
    }
}

/// The whole record, pretty-printed.
pub fn json(record: &AccountRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

/// Field/Value table of the headline metadata.
pub fn table(record: &AccountRecord) -> String {
    let m = &record.metadata;
    let mut table = Table::new(["Field", "Value"]).header_colors([Color::Blue, Color::Green]);
    table
        .add_row(["Nickname", m.nickname.as_str()])
        .add_row(["Account ID", m.account_id.as_str()])
        .add_row(["Level", m.level.as_str()])
        .add_row(["Region", m.region.as_str()])
        .add_row(["Rank", m.rank.as_str()])
        .add_row(["EXP", m.exp.as_str()])
        .add_row(["Last Login", m.last_login_at.as_str()])
        .add_row(["Diamond Cost", m.diamond_cost.as_str()]);
    table.to_string()
}

/// Short colorized summary.
pub fn summary(record: &AccountRecord) -> String {
    let m = &record.metadata;
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", "🎮 Free Fire Account Summary".cyan().bold());
    for (label, value) in [
        ("Nickname:", &m.nickname),
        ("Level:", &m.level),
        ("Rank:", &m.rank),
        ("Region:", &m.region),
        ("Diamond Cost:", &m.diamond_cost),
    ] {
        let _ = writeln!(out, "{} {value}", label.yellow());
    }
    let _ = write!(
        out,
        "\n{}",
        "✅ Tip: Use --json or --table for more formats".green()
    );
    out
}

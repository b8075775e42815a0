use crate::core::time_converter::{DisplayPattern, OffsetlessPolicy, TimeConverter};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::truncate;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("constant pattern"));

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Colour for each audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(LogEntry {
                id: row.get(0)?,
                date: row.get(1)?,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Print the audit log with timestamps shown in the civil zone.
    pub fn print_log(pool: &DbPool, converter: &TimeConverter) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<(i64, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                // audit stamps are always written in UTC
                let date = converter
                    .parse_stored_as(&e.date, OffsetlessPolicy::Utc)
                    .map(|i| converter.format_for_display(i, DisplayPattern::DateTimeShort))
                    .unwrap_or(e.date);
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (e.id, date, op_target, e.message)
            })
            .collect();

        let op_w = rendered
            .iter()
            .map(|(_, _, op, _)| op.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = rendered
            .iter()
            .map(|(id, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rendered
            .iter()
            .map(|(_, d, _, _)| d.len())
            .max()
            .unwrap_or(16);

        println!("📜 Internal log ({}):\n", converter.zone());

        for (id, date, op_target, message) in rendered {
            let visible = truncate(&op_target, MAX_OP_WIDTH);

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color_for_operation(op).paint(op), rest),
                None => color_for_operation(&visible).paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

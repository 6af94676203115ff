use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 40;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Colour per operation family
fn color_for_operation(op: &str) -> Colour {
    match op {
        "CLOCK_IN" | "END_MEAL" => Colour::Green,
        "CLOCK_OUT" | "START_MEAL" => Colour::Red,
        "add" | "promote" | "grant-master" => Colour::Cyan,
        "remove" | "demote" | "revoke-master" => Colour::Yellow,
        "pay" => Colour::Purple,
        "init" | "seed" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

fn op_column(entry: &LogEntry) -> String {
    let colour = color_for_operation(&entry.operation);
    let mut out = colour.paint(entry.operation.as_str()).to_string();
    if !entry.target.is_empty() {
        out.push_str(&format!(" ({})", entry.target));
    }

    // truncate on visible characters, keep the coloured operation
    let visible = strip_ansi(&out);
    if visible.chars().count() > MAX_OP_WIDTH {
        let cut: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        let rest = cut.strip_prefix(entry.operation.as_str()).unwrap_or("");
        out = format!("{}{}...", colour.paint(entry.operation.as_str()), rest);
    }
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;
        if entries.is_empty() {
            info("Activity log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let ops: Vec<String> = entries.iter().map(op_column).collect();
        let op_w = ops
            .iter()
            .map(|o| strip_ansi(o).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Activity log:\n");

        for (entry, op) in entries.iter().zip(&ops) {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(op).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                op,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

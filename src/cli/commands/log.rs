use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::{LogEntry, load_entries};
use crate::db::slots::SqliteSlots;
use crate::errors::AppResult;
use ansi_term::Colour;

/// ANSI color for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "toggle" => Colour::Cyan,
        "export" => Colour::Blue,
        "login" | "logout" => Colour::White,
        "migration_applied" | "reset" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let slots = SqliteSlots::open(&cfg.database)?;
        let entries = load_entries(slots.conn())?;
        print_log(&entries);
    }

    Ok(())
}

fn print_log(entries: &[LogEntry]) {
    println!("📜 Internal log:\n");

    if entries.is_empty() {
        println!("(empty)");
        return;
    }

    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);

    // op + target in one column, capped at 40
    let op_target: Vec<String> = entries
        .iter()
        .map(|e| {
            if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            }
        })
        .collect();
    let op_w = op_target.iter().map(|s| s.len()).max().unwrap_or(10).min(40);

    for (e, ot) in entries.iter().zip(&op_target) {
        let date = chrono::DateTime::parse_from_rfc3339(&e.date)
            .map(|dt| dt.format("%F %T").to_string())
            .unwrap_or_else(|_| e.date.clone());

        let padded = format!("{:<op_w$}", ot, op_w = op_w);
        println!(
            "{:>id_w$}  {}  {}  {}",
            e.id,
            date,
            color_for_operation(&e.operation).paint(padded),
            e.message,
            id_w = id_w
        );
    }
}

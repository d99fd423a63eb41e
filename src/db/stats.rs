use crate::db::slots::SqliteSlots;
use crate::models::Summary;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print file size, slot inventory and roster counters.
pub fn print_db_info(slots: &SqliteSlots, db_path: &str, summary: &Summary) -> rusqlite::Result<()> {
    let conn = slots.conn();
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SLOTS
    //
    let mut stmt =
        conn.prepare("SELECT key, length(value), updated_at FROM slots ORDER BY key ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    println!("{}• Slots:{}", CYAN, RESET);
    let mut any = false;
    for r in rows {
        let (key, len, updated) = r?;
        let updated = if updated.is_empty() {
            format!("{GREY}--{RESET}")
        } else {
            updated
        };
        println!("    {:<12} {:>8} bytes  {}", key, len, updated);
        any = true;
    }
    if !any {
        println!("    {GREY}(none){RESET}");
    }

    //
    // 3) ROSTER
    //
    println!(
        "{}• Employees:{} {}{}{} ({} active, {} inactive)",
        CYAN, RESET, GREEN, summary.total, RESET, summary.active, summary.inactive
    );

    //
    // 4) LAST AUDIT ENTRY
    //
    let last: Option<String> = conn
        .query_row(
            "SELECT date || '  ' || operation FROM log ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "{}• Last log entry:{} {}",
        CYAN,
        RESET,
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}

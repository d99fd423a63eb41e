use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::slots::SqliteSlots;
use crate::db::stats;
use crate::errors::AppResult;
use crate::models::{Employee, Summary};
use crate::storage::{EMPLOYEES_KEY, SlotStore};
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info, check, reset } = cmd {
        let mut slots = SqliteSlots::open(&cfg.database)?;

        //
        // 1) INFO
        //
        if *info {
            let summary = stored_summary(&slots)?;
            stats::print_db_info(&slots, &cfg.database, &summary)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                slots
                    .conn()
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) RESET
        //
        if *reset {
            slots.remove(EMPLOYEES_KEY)?;
            audit(slots.conn(), "reset", EMPLOYEES_KEY, "Roster dropped");
            println!(
                "{}✔ Roster dropped; the built-in employees are restored on next use.{}\n",
                GREEN, RESET
            );
        }
    }

    Ok(())
}

/// Counters of the stored roster, read without seeding an empty database.
/// A payload that does not decode only warns, so the rest of the report
/// still prints.
fn stored_summary(slots: &SqliteSlots) -> AppResult<Summary> {
    let Some(raw) = slots.read(EMPLOYEES_KEY)? else {
        return Ok(Summary::default());
    };

    match serde_json::from_str::<Vec<Employee>>(&raw) {
        Ok(list) => Ok(Summary::of(&list)),
        Err(e) => {
            warning(format!("Stored roster is corrupt: {e}"));
            Ok(Summary::default())
        }
    }
}

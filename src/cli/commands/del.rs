use crate::cli::commands::{ensure_persisted, open_dashboard};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::NotFoundError;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_dashboard(cfg)?;

        let name = store
            .get(id)
            .map(|emp| emp.name.clone())
            .ok_or_else(|| NotFoundError(id.clone()))?;

        //
        // Confirmation prompt
        //
        let prompt = format!("Are you sure you want to delete {name} ({id})?");
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let removed = store.remove(id)?;
        ensure_persisted(&mut store)?;

        audit(
            store.slots().conn(),
            "del",
            &removed.id,
            &format!("Deleted {}", removed.name),
        );

        success(format!("Employee {} ({}) has been deleted.", removed.id, removed.name));
    }

    Ok(())
}

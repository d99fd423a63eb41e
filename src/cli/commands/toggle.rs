use crate::cli::commands::{ensure_persisted, open_dashboard};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { id } = cmd {
        let mut store = open_dashboard(cfg)?;

        let emp = store.toggle_active(id)?;
        ensure_persisted(&mut store)?;

        audit(
            store.slots().conn(),
            "toggle",
            &emp.id,
            &format!("Status set to {}", emp.status_label()),
        );

        success(format!("Employee {} is now {}.", emp.id, emp.status_label()));
    }

    Ok(())
}

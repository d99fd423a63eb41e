use crate::cli::commands::open_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let store = open_dashboard(cfg)?;
        let query = filter.to_query();
        let rows = store.filter(&query);
        let path = expand_tilde(file);

        let written = ExportLogic::export(&rows, &query, format, &path, *force)?;

        if written > 0 {
            audit(
                store.slots().conn(),
                "export",
                &path.to_string_lossy(),
                &format!("Exported {written} employees"),
            );
        }
    }
    Ok(())
}

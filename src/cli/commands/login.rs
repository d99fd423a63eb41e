use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session;
use crate::db::log::audit;
use crate::db::slots::SqliteSlots;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle `login` and `logout`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut slots = SqliteSlots::open(&cfg.database)?;

    match cmd {
        Commands::Login { username, password } => {
            session::login(&mut slots, cfg, username, password)?;
            audit(slots.conn(), "login", username, "Session opened");
            success(format!("Logged in as {username}."));
        }
        Commands::Logout => {
            session::logout(&mut slots)?;
            audit(slots.conn(), "logout", "", "Session closed");
            info("Logged out.");
        }
        _ => {}
    }

    Ok(())
}

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::EmployeeStore;
use crate::db::log::audit;
use crate::db::slots::SqliteSlots;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - the SQLite database and its schema
///  - the employee roster (seeded when empty)
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ Configuration
    //
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing empmanager…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_str);

    //
    // 2️⃣ Database (schema via migrations)
    //
    let slots = SqliteSlots::open(&db_str)?;

    //
    // 3️⃣ Roster
    //
    let store = EmployeeStore::load(slots);
    if let Some(e) = store.storage_error() {
        return Err(e.clone().into());
    }

    audit(
        store.slots().conn(),
        "init",
        "",
        &format!("Database initialized at {}", &db_str),
    );

    success(format!(
        "Database initialized with {} employees.",
        store.summary().total
    ));
    Ok(())
}

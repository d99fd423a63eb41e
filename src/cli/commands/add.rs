use crate::cli::commands::{ensure_persisted, open_dashboard, read_image_or_empty};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::EmployeeDraft;
use crate::ui::messages::success;

/// Add a new employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        id,
        name,
        gender,
        dob,
        state,
        image,
        inactive,
    } = cmd
    {
        let mut store = open_dashboard(cfg)?;

        //
        // 1. Build the draft (image encoded first, like the upload preview)
        //
        let draft = EmployeeDraft {
            id: id.clone(),
            name: name.clone(),
            gender: gender.clone(),
            dob: dob.clone(),
            state: state.clone(),
            is_active: !*inactive,
            image: image
                .as_deref()
                .map(read_image_or_empty)
                .unwrap_or_default(),
        };

        //
        // 2. Validate + insert
        //
        let emp = store.add(&draft)?;
        ensure_persisted(&mut store)?;

        //
        // 3. Audit log (non blocking)
        //
        audit(store.slots().conn(), "add", &emp.id, &format!("Added {}", emp.name));

        success(format!("Employee {} ({}) added.", emp.id, emp.name));
    }

    Ok(())
}

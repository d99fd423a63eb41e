use crate::cli::commands::{ensure_persisted, open_dashboard};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::image::{DataUriEncoder, encode_file};
use crate::core::store::NotFoundError;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::EmployeeDraft;
use crate::ui::messages::success;

/// Edit an employee. Fields not given on the command line keep their value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        gender,
        dob,
        state,
        image,
        active,
        inactive,
    } = cmd
    {
        let mut store = open_dashboard(cfg)?;

        //
        // 1. Prefill from the stored record
        //
        let current = store
            .get(id)
            .ok_or_else(|| NotFoundError(id.clone()))?;
        let mut draft = EmployeeDraft::from(current);

        //
        // 2. Apply overrides
        //
        if let Some(v) = name {
            draft.name = v.clone();
        }
        if let Some(v) = gender {
            draft.gender = v.clone();
        }
        if let Some(v) = dob {
            draft.dob = v.clone();
        }
        if let Some(v) = state {
            draft.state = v.clone();
        }
        if let Some(path) = image {
            draft.image = encode_file(&DataUriEncoder, path)?;
        }
        if *active {
            draft.is_active = true;
        } else if *inactive {
            draft.is_active = false;
        }

        //
        // 3. Validate + replace in place
        //
        let emp = store.update(id, &draft)?;
        ensure_persisted(&mut store)?;

        audit(store.slots().conn(), "edit", &emp.id, &format!("Updated {}", emp.name));

        success(format!("Employee {} updated.", emp.id));
    }

    Ok(())
}

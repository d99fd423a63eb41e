pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod toggle;

use crate::config::Config;
use crate::core::image::{DataUriEncoder, encode_file};
use crate::core::session::{AuthContext, require_login};
use crate::core::store::EmployeeStore;
use crate::db::slots::SqliteSlots;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::path::Path;

pub(crate) type Dashboard = EmployeeStore<SqliteSlots>;

/// Open the database, pass the login gate and load the roster.
pub(crate) fn open_dashboard(cfg: &Config) -> AppResult<Dashboard> {
    let slots = SqliteSlots::open(&cfg.database)?;

    let ctx = AuthContext::from_slots(&slots, cfg);
    require_login(&ctx)?;

    let mut store = EmployeeStore::load(slots);
    if let Some(e) = store.take_storage_error() {
        warning(e);
    }
    Ok(store)
}

/// After a mutation: surface a failed write as an error.
pub(crate) fn ensure_persisted(store: &mut Dashboard) -> AppResult<()> {
    match store.take_storage_error() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Encode the picture for a draft. For `add` an unusable file only warns
/// and leaves the image empty, so validation reports it with the rest.
pub(crate) fn read_image_or_empty(path: &Path) -> String {
    match encode_file(&DataUriEncoder, path) {
        Ok(uri) => uri,
        Err(e) => {
            warning(e);
            String::new()
        }
    }
}

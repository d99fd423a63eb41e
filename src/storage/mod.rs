//! Durable key-value slots.
//!
//! The employee store and the session flag only ever talk to a
//! [`SlotStore`]; the SQLite implementation lives in `db::slots`, and
//! [`MemorySlots`] is the in-process double used by tests.

mod memory;

pub use memory::MemorySlots;

use thiserror::Error;

/// Slot holding the JSON-encoded employee collection.
pub const EMPLOYEES_KEY: &str = "employees";

/// Slot holding the session flag (`"true"` when logged in).
pub const SESSION_KEY: &str = "isLoggedIn";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Storage unavailable for slot '{key}': {reason}")]
pub struct StorageUnavailable {
    pub key: String,
    pub reason: String,
}

impl StorageUnavailable {
    pub fn new(key: &str, reason: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub trait SlotStore {
    /// `Ok(None)` means the slot has never been written (or was removed).
    fn read(&self, key: &str) -> Result<Option<String>, StorageUnavailable>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageUnavailable>;

    fn remove(&mut self, key: &str) -> Result<(), StorageUnavailable>;
}

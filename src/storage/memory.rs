use super::{SlotStore, StorageUnavailable};
use std::collections::HashMap;

/// HashMap-backed slots. `set_available(false)` makes every call fail and
/// `fail_writes(true)` only the mutating ones, which is how tests exercise
/// the degraded-persistence paths.
#[derive(Debug, Clone)]
pub struct MemorySlots {
    slots: HashMap<String, String>,
    available: bool,
    writes_fail: bool,
}

impl Default for MemorySlots {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySlots {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            available: true,
            writes_fail: false,
        }
    }

    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn fail_writes(&mut self, fail: bool) {
        self.writes_fail = fail;
    }

    /// Raw slot content, bypassing the availability switch.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    fn check(&self, key: &str) -> Result<(), StorageUnavailable> {
        if self.available {
            Ok(())
        } else {
            Err(StorageUnavailable::new(key, "memory slots disabled"))
        }
    }

    fn check_write(&self, key: &str) -> Result<(), StorageUnavailable> {
        self.check(key)?;
        if self.writes_fail {
            return Err(StorageUnavailable::new(key, "memory slots read-only"));
        }
        Ok(())
    }
}

impl SlotStore for MemorySlots {
    fn read(&self, key: &str) -> Result<Option<String>, StorageUnavailable> {
        self.check(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageUnavailable> {
        self.check_write(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageUnavailable> {
        self.check_write(key)?;
        self.slots.remove(key);
        Ok(())
    }
}

//! The employee collection and its lifecycle.
//!
//! `EmployeeStore` is the single source of truth for the roster. It keeps the
//! records in insertion order, validates every add/edit, and writes the whole
//! collection back to the `employees` slot after each mutation.
//!
//! Persistence failures never undo an in-memory change: the store keeps
//! working for the rest of the session and remembers the last
//! [`StorageUnavailable`] so the caller can report it.

use crate::core::seed;
use crate::core::validation::{ValidationErrors, validate};
use crate::models::{Employee, EmployeeDraft, EmployeeQuery, Summary};
use crate::storage::{EMPLOYEES_KEY, SlotStore, StorageUnavailable};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Employee '{0}' not found")]
pub struct NotFoundError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

pub struct EmployeeStore<S: SlotStore> {
    slots: S,
    employees: Vec<Employee>,
    storage_error: Option<StorageUnavailable>,
}

impl<S: SlotStore> EmployeeStore<S> {
    /// Open the store on top of `slots`.
    ///
    /// An empty slot is seeded with the built-in roster (and the seed is
    /// written back). A slot that cannot be read or decoded yields an empty
    /// collection and a recorded storage error. Stored records go through
    /// the same validation as new ones; those that fail are dropped and
    /// reported as a storage error.
    pub fn load(slots: S) -> Self {
        let mut store = Self {
            slots,
            employees: Vec::new(),
            storage_error: None,
        };
        store.reload();
        store
    }

    /// Re-read the `employees` slot, replacing the in-memory collection.
    pub fn reload(&mut self) -> &[Employee] {
        match self.slots.read(EMPLOYEES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Employee>>(&raw) {
                Ok(list) => {
                    let (kept, dropped) = revalidate(list);
                    self.employees = kept;
                    if dropped > 0 {
                        self.storage_error = Some(StorageUnavailable::new(
                            EMPLOYEES_KEY,
                            format!("dropped {dropped} invalid record(s) from stored payload"),
                        ));
                    }
                }
                Err(e) => {
                    self.employees = Vec::new();
                    self.storage_error = Some(StorageUnavailable::new(
                        EMPLOYEES_KEY,
                        format!("corrupt payload: {e}"),
                    ));
                }
            },
            Ok(None) => {
                self.employees = seed::initial_employees();
                self.persist();
            }
            Err(e) => {
                self.employees = Vec::new();
                self.storage_error = Some(e);
            }
        }

        &self.employees
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|emp| emp.id == id)
    }

    pub fn add(&mut self, draft: &EmployeeDraft) -> Result<Employee, ValidationErrors> {
        let emp = validate(draft, &self.employees, None)?;
        self.employees.push(emp.clone());
        self.persist();
        Ok(emp)
    }

    /// Replace every field of record `id` except the id itself.
    pub fn update(&mut self, id: &str, draft: &EmployeeDraft) -> Result<Employee, UpdateError> {
        let idx = self.position(id)?;

        let draft = EmployeeDraft {
            id: id.to_string(),
            ..draft.clone()
        };
        let emp = validate(&draft, &self.employees, Some(id))?;

        self.employees[idx] = emp.clone();
        self.persist();
        Ok(emp)
    }

    pub fn remove(&mut self, id: &str) -> Result<Employee, NotFoundError> {
        let idx = self.position(id)?;
        let removed = self.employees.remove(idx);
        self.persist();
        Ok(removed)
    }

    pub fn toggle_active(&mut self, id: &str) -> Result<Employee, NotFoundError> {
        let idx = self.position(id)?;
        let emp = &mut self.employees[idx];
        emp.is_active = !emp.is_active;
        let updated = emp.clone();
        self.persist();
        Ok(updated)
    }

    pub fn filter(&self, query: &EmployeeQuery) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|emp| query.matches(emp))
            .collect()
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.employees)
    }

    /// Last persistence failure, if any.
    pub fn storage_error(&self) -> Option<&StorageUnavailable> {
        self.storage_error.as_ref()
    }

    pub fn take_storage_error(&mut self) -> Option<StorageUnavailable> {
        self.storage_error.take()
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    pub fn into_slots(self) -> S {
        self.slots
    }

    fn position(&self, id: &str) -> Result<usize, NotFoundError> {
        self.employees
            .iter()
            .position(|emp| emp.id == id)
            .ok_or_else(|| NotFoundError(id.to_string()))
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.employees)
            .map_err(|e| StorageUnavailable::new(EMPLOYEES_KEY, e))
            .and_then(|json| self.slots.write(EMPLOYEES_KEY, &json));

        if let Err(e) = result {
            self.storage_error = Some(e);
        }
    }
}

/// Re-run validation over a decoded payload, in order. Ids and names come
/// back trimmed; a record that fails (including a repeated id) is skipped.
fn revalidate(list: Vec<Employee>) -> (Vec<Employee>, usize) {
    let mut kept: Vec<Employee> = Vec::with_capacity(list.len());
    let mut dropped = 0;

    for emp in list {
        match validate(&EmployeeDraft::from(&emp), &kept, None) {
            Ok(valid) => kept.push(valid),
            Err(_) => dropped += 1,
        }
    }

    (kept, dropped)
}

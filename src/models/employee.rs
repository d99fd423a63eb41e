use crate::models::gender::Gender;
use crate::models::state::State;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated employee record, as persisted in the `employees` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
    pub state: State,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub image: String,
}

fn default_active() -> bool {
    true
}

impl Employee {
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }
}

/// Raw form input for the add/edit workflows.
///
/// Every field is kept as the user typed it; only
/// [`validate`](crate::core::validation::validate) turns a draft into an
/// [`Employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub dob: String,
    pub state: String,
    pub is_active: bool,
    pub image: String,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            gender: String::new(),
            dob: String::new(),
            state: String::new(),
            is_active: true,
            image: String::new(),
        }
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(emp: &Employee) -> Self {
        Self {
            id: emp.id.clone(),
            name: emp.name.clone(),
            gender: emp.gender.as_str().to_string(),
            dob: format_date(&emp.dob),
            state: emp.state.as_str().to_string(),
            is_active: emp.is_active,
            image: emp.image.clone(),
        }
    }
}

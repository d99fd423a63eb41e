use crate::models::employee::Employee;
use serde::Serialize;

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl Summary {
    pub fn of(employees: &[Employee]) -> Self {
        let total = employees.len();
        let active = employees.iter().filter(|e| e.is_active).count();
        Self {
            total,
            active,
            inactive: total - active,
        }
    }
}

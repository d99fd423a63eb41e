use crate::models::employee::Employee;
use crate::models::gender::Gender;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    #[default]
    Any,
    Only(Gender),
}

impl GenderFilter {
    pub fn matches(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::Any => true,
            GenderFilter::Only(g) => *g == gender,
        }
    }
}

impl FromStr for GenderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "any" => Ok(GenderFilter::Any),
            other => Gender::from_input(other)
                .map(GenderFilter::Only)
                .ok_or_else(|| format!("'{s}' (expected all, male or female)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(&self, is_active: bool) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "any" => Ok(StatusFilter::Any),
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            _ => Err(format!("'{s}' (expected all, active or inactive)")),
        }
    }
}

/// Search box + the two drop-downs of the employee table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeQuery {
    pub name: String,
    pub gender: GenderFilter,
    pub status: StatusFilter,
}

impl EmployeeQuery {
    pub fn new(name: impl Into<String>, gender: GenderFilter, status: StatusFilter) -> Self {
        Self {
            name: name.into(),
            gender,
            status,
        }
    }

    /// Case-insensitive substring on the name, exact gender and status.
    pub fn matches(&self, emp: &Employee) -> bool {
        let needle = self.name.to_lowercase();

        emp.name.to_lowercase().contains(&needle)
            && self.gender.matches(emp.gender)
            && self.status.matches(emp.is_active)
    }
}

use crate::core::image::mime_of;
use crate::models::Employee;
use crate::utils::date::format_date;
use serde::Serialize;

/// Flat row for export. The picture itself is not exported, only its type.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EmployeeExport {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub dob: String,
    pub state: String,
    pub status: String,
    pub image_type: String,
}

impl From<&Employee> for EmployeeExport {
    fn from(emp: &Employee) -> Self {
        Self {
            id: emp.id.clone(),
            name: emp.name.clone(),
            gender: emp.gender.as_str().to_string(),
            dob: format_date(&emp.dob),
            state: emp.state.as_str().to_string(),
            status: emp.status_label().to_string(),
            image_type: mime_of(&emp.image).unwrap_or("").to_string(),
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["ID", "Name", "Gender", "DOB", "State", "Status", "Profile"]
}

pub(crate) fn employee_to_row(e: &EmployeeExport) -> Vec<String> {
    vec![
        e.id.clone(),
        e.name.clone(),
        e.gender.clone(),
        e.dob.clone(),
        e.state.clone(),
        e.status.clone(),
        if e.image_type.is_empty() {
            "N/A".to_string()
        } else {
            e.image_type.clone()
        },
    ]
}

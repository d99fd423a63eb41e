use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json, export_txt};
use crate::export::model::EmployeeExport;
use crate::models::{Employee, EmployeeQuery, GenderFilter, StatusFilter};
use crate::ui::messages::warning;
use std::path::Path;

/// Export of the (filtered) employee table.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `employees` to `file` in `format`.
    ///
    /// An empty selection writes nothing and only warns.
    pub fn export(
        employees: &[&Employee],
        query: &EmployeeQuery,
        format: &ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<usize> {
        if employees.is_empty() {
            warning("No employees found for the selected filters.");
            return Ok(0);
        }

        ensure_writable(file, force)?;

        let rows: Vec<EmployeeExport> = employees.iter().map(|e| EmployeeExport::from(*e)).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
            ExportFormat::Txt => export_txt(&rows, file, &build_title(query))?,
        }

        Ok(rows.len())
    }
}

fn build_title(query: &EmployeeQuery) -> String {
    let mut parts = Vec::new();

    if !query.name.is_empty() {
        parts.push(format!("name contains \"{}\"", query.name));
    }
    if let GenderFilter::Only(g) = query.gender {
        parts.push(format!("gender {g}"));
    }
    match query.status {
        StatusFilter::Active => parts.push("active only".to_string()),
        StatusFilter::Inactive => parts.push("inactive only".to_string()),
        StatusFilter::Any => {}
    }

    if parts.is_empty() {
        "Employee List".to_string()
    } else {
        format!("Employee List ({})", parts.join(", "))
    }
}

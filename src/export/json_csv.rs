use crate::errors::{AppError, AppResult};
use crate::export::model::{EmployeeExport, employee_to_row, get_headers};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[EmployeeExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header row comes from the serde field names).
pub(crate) fn export_csv(rows: &[EmployeeExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr =
        csv::Writer::from_path(path).map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export a printable plain-text table.
pub(crate) fn export_txt(rows: &[EmployeeExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to text: {}", path.display()));

    let widths = [8, 24, 7, 10, 11, 8, 10];
    let columns = get_headers()
        .into_iter()
        .zip(widths)
        .map(|(h, w)| Column::new(h, w))
        .collect();

    let mut table = Table::new(columns);
    for r in rows {
        table.add_row(employee_to_row(r));
    }

    let mut file = File::create(path)?;
    writeln!(file, "{title}\n")?;
    file.write_all(table.render().as_bytes())?;

    notify_export_success("Text", path);
    Ok(())
}

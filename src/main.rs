//! empmanager main entrypoint.

use empmanager::errors::AppError;
use empmanager::run;
use empmanager::ui::messages::{error, field_errors};

fn main() {
    println!();
    if let Err(e) = run() {
        match &e {
            AppError::Validation(errs) => {
                error("Invalid employee data:");
                field_errors(errs);
            }
            other => error(format!("Error: {}", other)),
        }
        std::process::exit(1);
    }
}

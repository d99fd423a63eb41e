/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Green "Active" / red "Inactive" badge for the status column.
pub fn colorize_status(is_active: bool) -> String {
    if is_active {
        format!("{GREEN}Active{RESET}")
    } else {
        format!("{RED}Inactive{RESET}")
    }
}

/// Grey placeholder for empty cells.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "N/A" {
        format!("{GREY}N/A{RESET}")
    } else {
        value.to_string()
    }
}

use crate::cli::commands::open_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::image::mime_of;
use crate::errors::AppResult;
use crate::models::{Employee, Summary};
use crate::ui::messages::header;
use crate::utils::date::format_date;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, colorize_optional, colorize_status};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::List { filter } => {
            let store = open_dashboard(cfg)?;

            header("Welcome 👋");
            print_cards(&store.summary());

            println!("\nEmployee List\n");
            let rows = store.filter(&filter.to_query());
            print_table(&rows, cfg.name_column_width);
        }
        Commands::Summary => {
            let store = open_dashboard(cfg)?;
            print_cards(&store.summary());
        }
        _ => {}
    }

    Ok(())
}

fn print_cards(s: &Summary) {
    println!(
        "{CYAN}Total:{RESET} {}   {GREEN}Active:{RESET} {}   {RED}Inactive:{RESET} {}",
        s.total, s.active, s.inactive
    );
}

fn print_table(rows: &[&Employee], name_width: usize) {
    if rows.is_empty() {
        println!("No employees found");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("Profile", 10),
        Column::new("Name", name_width),
        Column::new("Gender", 7),
        Column::new("DOB", 10),
        Column::new("State", 11),
        Column::new("Status", 8),
    ]);

    for emp in rows {
        table.add_row(vec![
            emp.id.clone(),
            colorize_optional(mime_of(&emp.image).unwrap_or("")),
            emp.name.clone(),
            emp.gender.to_string(),
            format_date(&emp.dob),
            emp.state.to_string(),
            colorize_status(emp.is_active),
        ]);
    }

    print!("{}", table.render());
}

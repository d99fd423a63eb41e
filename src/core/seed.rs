//! Built-in roster written to an empty database on first load.

use crate::models::{Employee, Gender, State};
use chrono::NaiveDate;

/// 1x1 grey PNG used as the placeholder profile picture.
pub const PLACEHOLDER_IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAAAAAA6fptVAAAACklEQVR4nGNoAAAAggCBd81ytgAAAABJRU5ErkJggg==";

type SeedRow = (&'static str, &'static str, Gender, (i32, u32, u32), State, bool);

const SEED: &[SeedRow] = &[
    ("EMP001", "Arun Kumar", Gender::Male, (1990, 5, 14), State::TamilNadu, true),
    ("EMP002", "Priya Nair", Gender::Female, (1993, 11, 2), State::Kerala, true),
    ("EMP003", "Suresh Gowda", Gender::Male, (1987, 1, 23), State::Karnataka, false),
    ("EMP004", "Lakshmi Menon", Gender::Female, (1995, 8, 9), State::Kerala, true),
    ("EMP005", "Karthik Raja", Gender::Male, (1992, 3, 30), State::TamilNadu, false),
];

pub fn initial_employees() -> Vec<Employee> {
    SEED.iter()
        .filter_map(|(id, name, gender, (y, m, d), state, active)| {
            Some(Employee {
                id: id.to_string(),
                name: name.to_string(),
                gender: *gender,
                dob: NaiveDate::from_ymd_opt(*y, *m, *d)?,
                state: *state,
                is_active: *active,
                image: PLACEHOLDER_IMAGE.to_string(),
            })
        })
        .collect()
}

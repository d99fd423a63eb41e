//! Form validation for the add/edit workflows.
//!
//! Every rule runs on every call; the caller gets the full set of field
//! errors at once instead of the first failure.

use crate::models::{Employee, EmployeeDraft, Gender, State};
use crate::utils::date::parse_date;
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_NAME_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    Name,
    Gender,
    Dob,
    State,
    Image,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Gender => "gender",
            Field::Dob => "dob",
            Field::State => "state",
            Field::Image => "image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name → message. At most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in field order (id, name, gender, dob, state, image).
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed")?;
        for (i, (field, msg)) in self.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{field}: {msg}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate `draft` against the current collection.
///
/// `editing` is the id of the record being edited, which is excluded from
/// the uniqueness check. On success the returned record has `id` and `name`
/// trimmed.
pub fn validate(
    draft: &EmployeeDraft,
    existing: &[Employee],
    editing: Option<&str>,
) -> Result<Employee, ValidationErrors> {
    let mut errs = ValidationErrors::new();

    // id
    let id = draft.id.trim();
    if id.is_empty() {
        errs.add(Field::Id, "Employee ID required");
    } else if existing
        .iter()
        .any(|emp| emp.id == id && Some(emp.id.as_str()) != editing)
    {
        errs.add(Field::Id, "Employee ID must be unique");
    }

    // name
    let name = draft.name.trim();
    if name.is_empty() {
        errs.add(Field::Name, "Name required");
    } else if name.chars().count() < MIN_NAME_LEN {
        errs.add(Field::Name, format!("Min {MIN_NAME_LEN} characters"));
    }

    // gender
    let gender = if draft.gender.trim().is_empty() {
        errs.add(Field::Gender, "Gender required");
        None
    } else {
        let g = Gender::from_input(&draft.gender);
        if g.is_none() {
            errs.add(Field::Gender, "Gender must be Male or Female");
        }
        g
    };

    // dob
    let dob = if draft.dob.trim().is_empty() {
        errs.add(Field::Dob, "DOB required");
        None
    } else {
        let d = parse_date(&draft.dob);
        if d.is_none() {
            errs.add(Field::Dob, "DOB must be a valid date (YYYY-MM-DD)");
        }
        d
    };

    // state
    let state = if draft.state.trim().is_empty() {
        errs.add(Field::State, "State required");
        None
    } else {
        let s = State::from_input(&draft.state);
        if s.is_none() {
            errs.add(
                Field::State,
                "State must be one of Tamil Nadu, Karnataka, Kerala",
            );
        }
        s
    };

    // image
    if draft.image.trim().is_empty() {
        errs.add(Field::Image, "Profile image is required");
    }

    match (gender, dob, state) {
        (Some(gender), Some(dob), Some(state)) if errs.is_empty() => Ok(Employee {
            id: id.to_string(),
            name: name.to_string(),
            gender,
            dob,
            state,
            is_active: draft.is_active,
            image: draft.image.clone(),
        }),
        _ => Err(errs),
    }
}

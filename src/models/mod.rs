pub mod employee;
pub mod gender;
pub mod query;
pub mod state;
pub mod summary;

pub use employee::{Employee, EmployeeDraft};
pub use gender::Gender;
pub use query::{EmployeeQuery, GenderFilter, StatusFilter};
pub use state::State;
pub use summary::Summary;

pub mod image;
pub mod seed;
pub mod session;
pub mod store;
pub mod validation;

pub use store::{EmployeeStore, NotFoundError, UpdateError};
pub use validation::{Field, ValidationErrors};

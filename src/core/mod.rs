pub mod error;
pub mod money;
pub mod timestamp;

pub use error::{AppError, Result, ValidationError};

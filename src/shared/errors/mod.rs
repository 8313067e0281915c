pub mod app_error;

pub use app_error::{command_error, AppError, AppResult};

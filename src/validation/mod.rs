mod errors;
mod validator;

pub use errors::RowError;
pub use validator::RecordValidator;

use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum SchemaError {
    #[error("Header is missing required columns: {}", missing.join(", "))]
    MissingColumns {
        missing: Vec<String>
    }
}

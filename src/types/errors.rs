use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: value is an empty string")]
    Empty,
    #[error("Amount error: '{value}' contains '{character}' which is not part of a decimal number")]
    UnexpectedCharacter {
        value: String,
        character: char
    },
    #[error("Amount error: '{value}' is not a decimal number ({source})")]
    InvalidFormat {
        value: String,
        source: rust_decimal::Error
    }
}

use crate::schema::SchemaError;
use crate::source::SourceError;
use thiserror::Error;

/// Failures that end a run before a report can be produced.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Source(#[from] SourceError)
}

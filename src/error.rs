//! Crate-wide error type.

use thiserror::Error as ThisError;

use crate::store::RouteId;

/// Errors raised by ingestion, storage, configuration and the route service.
///
/// The optimizer itself never fails; every variant here comes from the
/// collaborators around it.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
    #[error("input has no header row")]
    EmptyInput,
    #[error("missing column `{0}` in header")]
    MissingColumn(String),
    #[error("line {line}: missing value for column `{column}`")]
    MissingField { line: usize, column: String },
    #[error("line {line}: invalid number for column `{column}`: {value:?}")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },
    #[error("too many points: {count} (limit {limit})")]
    TooManyPoints { count: usize, limit: usize },
    #[error("route {0} not found")]
    RouteNotFound(RouteId),
    #[error("route store failure: {0}")]
    Store(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` for errors caused by the caller's input rather than
    /// by the store or the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidEncoding(_)
                | Self::EmptyInput
                | Self::MissingColumn(_)
                | Self::MissingField { .. }
                | Self::InvalidNumber { .. }
                | Self::TooManyPoints { .. }
        )
    }
}

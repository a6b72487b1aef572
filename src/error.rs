use crate::domain::ports::EntityId;
use rust_decimal::Decimal;
use thiserror::Error;

/// A persisted record line that could not be turned back into an entity.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct DecodeError(pub String);

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Entity with id {0} already exists")]
    DuplicateKey(EntityId),
    #[error("Entity with id {0} not found")]
    NotFound(EntityId),
    #[error("Invalid quantity: {0} (must be zero or greater)")]
    InvalidQuantity(i64),
    #[error("Line {line}: expected {expected} fields, found {found}")]
    MissingField {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: invalid {field} '{value}'")]
    InvalidFormat {
        line: u64,
        field: &'static str,
        value: String,
    },
    #[error("Malformed record at line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

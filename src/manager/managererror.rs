use serde::Deserialize;
use thiserror::Error;

use crate::algebra::algebraerror::AlgebraError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    AlgebraError(#[from] AlgebraError),
    #[error("invalid decimal '{text}': {source}")]
    DecimalParseError {
        text: String,
        #[source]
        source: rust_decimal::Error
    },
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error(transparent)]
    UuidParseError(#[from] uuid::Error)
}

impl ManagerError {
    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
    where T: for<'a> Deserialize<'a> {
    serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
}

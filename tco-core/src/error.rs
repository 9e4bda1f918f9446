use thiserror::Error;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;
use std::io::Error as IoError;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum TcoError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] JsonError),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] TomlError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

impl TcoError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        TcoError::InvalidInput(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TcoError::InvalidInput(_))
    }
}

impl From<ValidationError> for TcoError {
    fn from(err: ValidationError) -> Self {
        TcoError::InvalidInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TcoError>;

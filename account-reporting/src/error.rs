//! Error types for account reporting requests

use thiserror::Error;

/// Result type for account reporting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Account reporting errors
#[derive(Error, Debug)]
pub enum Error {
    /// Discriminant or token outside a closed ISO code list
    #[error("Invalid {list} code: {value}")]
    InvalidCode {
        list: &'static str,
        value: String,
    },

    /// Calendar date or time that does not exist
    #[error("Invalid temporal value: {0}")]
    InvalidTemporal(String),

    /// XML serialization error
    #[error("XML encoding error: {0}")]
    Encoding(#[from] quick_xml::DeError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

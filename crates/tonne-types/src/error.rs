use thiserror::Error;

#[derive(Error, Debug)]
pub enum TonneError {
    #[error("Unknown {table} key: '{key}'")]
    UnknownKey { table: &'static str, key: String },

    #[error("Undefined ratio in energy bin {bin}: {message}")]
    UndefinedRatio { bin: usize, message: String },

    #[error("Malformed external table: {0}")]
    MalformedTable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TonneError {
    /// Shorthand for a failed enumeration lookup.
    pub fn unknown_key(table: &'static str, key: impl Into<String>) -> Self {
        TonneError::UnknownKey {
            table,
            key: key.into(),
        }
    }
}

pub type TonneResult<T> = Result<T, TonneError>;

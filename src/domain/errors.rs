use thiserror::Error;

/// Failures of the series transformer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Percent change against a zero reference price
    #[error("percent change is undefined for a zero reference price")]
    DivisionUndefined,

    /// Contract violation by the caller, e.g. a zero moving average period
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Data-quality problems found in provider output
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("non-finite price at {timestamp}")]
    NonFinitePrice { timestamp: u64 },

    #[error("negative volume {volume} at {timestamp}")]
    NegativeVolume { timestamp: u64, volume: f64 },

    #[error("OHLC logic violation at {timestamp}: {reason}")]
    OhlcLogicViolation { timestamp: u64, reason: String },

    #[error("timestamps stop increasing at index {index}")]
    InvalidSequence { index: usize },
}

/// Errors raised by a data provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("no data for symbol {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("parse error: {0}")]
    ParseError(String),
}

/// Invalid dashboard settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("refresh interval {0}s is outside 30..=300")]
    RefreshOutOfRange(u64),

    #[error("malformed configuration: {0}")]
    Malformed(String),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Root error type of the crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Transform Error: {0}")]
    Transform(#[from] TransformError),

    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository Error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Config Error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

pub type AppResult<T> = Result<T, AppError>;

use thiserror::Error;

/// Errors raised while reading configuration values from the host environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown {kind} value: {value:?}")]
    UnknownValue { kind: &'static str, value: String },
    #[error("invalid seed {value:?}: {reason}")]
    InvalidSeed { value: String, reason: String },
}

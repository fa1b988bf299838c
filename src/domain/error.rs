use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Empty password")]
    EmptyPassword,

    #[error("Password too long (maximum {max} bytes, got {len})")]
    PasswordTooLong { len: usize, max: usize },

    #[error("Invalid cost factor: {0}")]
    InvalidCost(u32),

    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Background task failed: {0}")]
    TaskFailed(String),

    #[error("Unknown hash scheme: {0}")]
    UnknownScheme(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

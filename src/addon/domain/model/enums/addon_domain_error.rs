use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddonDomainError {
    #[error("tenant identity is invalid: {0}")]
    InvalidTenantIdentity(String),

    #[error("generated password is invalid; expected 64 lowercase hex characters")]
    InvalidGeneratedPassword,

    #[error("{0}")]
    ConfigurationError(String),

    #[error("{0}")]
    ConnectionError(String),

    #[error("{0}")]
    ExecutionError(String),
}

//! Error types for signer resolution.
//! Construction, resolution and configuration failures share one enum so callers
//! can match on the failure kind instead of parsing messages.

use thiserror::Error;

/// Result type for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Failure kinds raised while parsing containers and resolving their signer
#[derive(Error, Debug, miette::Diagnostic)]
pub enum ResolveError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid signature format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported signature format: {0}")]
    UnsupportedFormat(String),

    #[error("PKCS#7 SignedData certificates not found")]
    MissingCertificate,

    #[error("PKCS#7 SignedData signerInfo not found")]
    MissingSignerInfo,

    #[error("Signer certificate not found")]
    SignerNotFound,

    #[error("Expected a single signer certificate but found {0}")]
    AmbiguousSigner(usize),

    #[error("Invalid certificate format: {0}")]
    InvalidCertificate(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<der::Error> for ResolveError {
    fn from(error: der::Error) -> Self {
        ResolveError::InvalidFormat(error.to_string())
    }
}

impl From<std::io::Error> for ResolveError {
    fn from(error: std::io::Error) -> Self {
        ResolveError::IoError(error.to_string())
    }
}

//! Error types for keyfob operations.

use thiserror::Error;

/// Top-level error wrapping all failure domains.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

/// Failures loading or validating the release signing configuration.
///
/// All of these are fatal: a release build must never fall back to a
/// default identity, so no variant here is recoverable.
#[derive(Error, Debug)]
pub enum SigningError {
    /// The conventional properties file does not exist at all.
    #[error("key.properties not found at {path}")]
    MissingConfigFile { path: String },

    /// The file exists but a required key is absent (or empty).
    #[error("{field} missing in key.properties")]
    MissingRequiredField { field: &'static str },

    /// Packaging-time check: the keystore `storeFile` points at is absent.
    #[error("keystore not found at {path} (storeFile in key.properties)")]
    KeystoreNotFound { path: String },
}

/// Failures scaffolding the signing configuration.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("key.properties already exists (use --force to overwrite)")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, Error>;

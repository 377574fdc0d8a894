//! Release signing credentials.
//!
//! Loads key.properties and materializes the validated, immutable
//! credentials record the packaging step signs with. Construction is
//! all-or-nothing: either every required field is present or the load
//! fails, so downstream consumers never see a partial config.

use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroize;

use crate::core::constants;
use crate::core::properties::Properties;
use crate::error::{Result, SigningError};

/// Validated release-signing material from key.properties.
///
/// Values are held verbatim as parsed — no trimming, no defaulting.
/// The two passwords are wiped from memory on drop and redacted from
/// `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningCredentials {
    store_file: PathBuf,
    store_password: String,
    key_alias: String,
    key_password: String,
}

impl SigningCredentials {
    /// Load and validate signing credentials from a properties file.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::MissingConfigFile` if `path` does not exist
    /// (checked before any parse — a release build gets no fallback), or
    /// `SigningError::MissingRequiredField` for the first required key
    /// that is absent or empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading signing config");

        if !path.exists() {
            return Err(SigningError::MissingConfigFile {
                path: path.display().to_string(),
            }
            .into());
        }

        let props = Properties::load(path)?;
        let credentials = Self::from_properties(&props)?;

        debug!(
            store_file = %credentials.store_file.display(),
            key_alias = %credentials.key_alias,
            "signing config loaded"
        );

        Ok(credentials)
    }

    /// Validate parsed properties into credentials.
    ///
    /// Required keys are checked in the contract order `storeFile`,
    /// `storePassword`, `keyAlias`, `keyPassword`; the first missing one
    /// fails, so an incomplete file reports deterministically. Keys the
    /// contract does not know are ignored.
    pub fn from_properties(props: &Properties) -> Result<Self> {
        let store_file = required(props, constants::KEY_STORE_FILE)?;
        let store_password = required(props, constants::KEY_STORE_PASSWORD)?;
        let key_alias = required(props, constants::KEY_ALIAS)?;
        let key_password = required(props, constants::KEY_KEY_PASSWORD)?;

        Ok(Self {
            store_file: PathBuf::from(store_file),
            store_password: store_password.to_string(),
            key_alias: key_alias.to_string(),
            key_password: key_password.to_string(),
        })
    }

    /// Keystore path exactly as written in key.properties
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    /// Keystore-level password
    pub fn store_password(&self) -> &str {
        &self.store_password
    }

    /// Alias of the signing key inside the keystore
    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    /// Key-level password
    pub fn key_password(&self) -> &str {
        &self.key_password
    }

    /// Keystore path resolved against the project root.
    ///
    /// A relative `storeFile` resolves against the directory holding
    /// key.properties, the way the original build resolves it. Whether
    /// the file exists is a packaging-time question, not a load-time one.
    pub fn resolved_store_file(&self, root: &Path) -> PathBuf {
        if self.store_file.is_absolute() {
            self.store_file.clone()
        } else {
            root.join(&self.store_file)
        }
    }

    /// Properties representation, for writing a key.properties file.
    pub fn to_properties(&self, path: impl Into<PathBuf>) -> Properties {
        let pairs = vec![
            (
                constants::KEY_STORE_FILE.to_string(),
                self.store_file.display().to_string(),
            ),
            (
                constants::KEY_STORE_PASSWORD.to_string(),
                self.store_password.clone(),
            ),
            (constants::KEY_ALIAS.to_string(), self.key_alias.clone()),
            (
                constants::KEY_KEY_PASSWORD.to_string(),
                self.key_password.clone(),
            ),
        ];

        Properties::from_pairs(pairs, path.into())
    }
}

/// Look up a required key, treating an empty value as missing.
fn required<'a>(props: &'a Properties, field: &'static str) -> Result<&'a str> {
    match props.get(field) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SigningError::MissingRequiredField { field }.into()),
    }
}

impl std::fmt::Debug for SigningCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("store_file", &self.store_file)
            .field("store_password", &"<redacted>")
            .field("key_alias", &self.key_alias)
            .field("key_password", &"<redacted>")
            .finish()
    }
}

impl Drop for SigningCredentials {
    fn drop(&mut self) {
        self.store_password.zeroize();
        self.key_password.zeroize();
    }
}

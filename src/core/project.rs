//! Project root handling.
//!
//! A project is any directory that holds (or should hold) a
//! key.properties file. Discovery walks up from the starting directory
//! so commands work from anywhere inside a checkout.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::core::constants;
use crate::core::credentials::SigningCredentials;
use crate::error::{Result, SigningError};

/// A directory that signing commands operate in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
}

/// What `check --keystore` found out about the keystore file.
#[derive(Debug, Clone, serde::Serialize)]
pub struct KeystoreInfo {
    /// Resolved keystore path
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Hex SHA-256 of the file contents
    pub sha256: String,
}

impl Project {
    /// Locate the project root by walking up from `start`.
    ///
    /// The first ancestor containing key.properties wins. When no
    /// ancestor has one the start directory itself is the root, so a
    /// missing config still reports against the place the user ran from.
    pub fn discover(start: impl AsRef<Path>) -> Self {
        let start = start.as_ref();

        for dir in start.ancestors() {
            if dir.join(constants::PROPERTIES_FILE).exists() {
                debug!(root = %dir.display(), "found project root");
                return Self {
                    root: dir.to_path_buf(),
                };
            }
        }

        debug!(root = %start.display(), "no key.properties above start dir");
        Self {
            root: start.to_path_buf(),
        }
    }

    /// Project rooted at an explicit directory, no discovery.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the key.properties file for this project.
    pub fn properties_path(&self) -> PathBuf {
        self.root.join(constants::PROPERTIES_FILE)
    }

    /// Load and validate this project's signing credentials.
    ///
    /// # Errors
    ///
    /// Fails closed: missing file or missing field aborts, it never
    /// falls back to partial credentials.
    pub fn load_credentials(&self) -> Result<SigningCredentials> {
        SigningCredentials::load(self.properties_path())
    }

    /// Verify the keystore the credentials point at and fingerprint it.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::KeystoreNotFound` if the resolved
    /// `storeFile` path does not exist.
    pub fn check_keystore(&self, credentials: &SigningCredentials) -> Result<KeystoreInfo> {
        let path = credentials.resolved_store_file(&self.root);

        if !path.exists() {
            return Err(SigningError::KeystoreNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let contents = fs::read(&path)?;
        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let digest = hasher.finalize();
        let sha256: String = digest.iter().map(|b| format!("{:02x}", b)).collect();

        debug!(path = %path.display(), size = contents.len(), "keystore checked");

        Ok(KeystoreInfo {
            path,
            size: contents.len() as u64,
            sha256,
        })
    }

    /// Ensure `.gitignore` at the project root covers signing secrets.
    ///
    /// Adds `key.properties`, `*.jks`, and `*.keystore` if not already
    /// present. Existing entries and unrelated lines are left alone.
    ///
    /// # Errors
    ///
    /// Returns error if file operations fail.
    pub fn ensure_gitignore(&self) -> Result<()> {
        let gitignore = self.root.join(".gitignore");

        let existing = if gitignore.exists() {
            fs::read_to_string(&gitignore)?
        } else {
            String::new()
        };

        let mut updated = existing.clone();
        for entry in constants::GITIGNORE_ENTRIES {
            if !existing.lines().any(|l| l.trim() == *entry) {
                if !updated.is_empty() && !updated.ends_with('\n') {
                    updated.push('\n');
                }
                updated.push_str(entry);
                updated.push('\n');
            }
        }

        if updated != existing {
            fs::write(&gitignore, updated)?;
        }

        Ok(())
    }
}

//! Build variants and signing resolution.
//!
//! Release builds sign with credentials from key.properties and fail
//! hard when the config is absent or incomplete. Debug builds never
//! consult key.properties at all; they use the SDK's well-known debug
//! keystore, which tooling regenerates on demand.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::core::credentials::SigningCredentials;
use crate::core::project::Project;
use crate::error::{Error, Result};

/// Which build flavor is being signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildVariant {
    Debug,
    Release,
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Release => write!(f, "release"),
        }
    }
}

/// The SDK debug keystore identity.
///
/// Store password, alias, and key password are fixed by the SDK; only
/// the keystore location varies with the home directory.
#[derive(Clone, PartialEq, Eq)]
pub struct DebugIdentity {
    store_file: PathBuf,
}

impl DebugIdentity {
    /// Locate the debug keystore under the user's home directory.
    ///
    /// The file itself may not exist yet; the SDK creates it on first
    /// debug build, so location is not existence.
    ///
    /// # Errors
    ///
    /// Returns error if the home directory cannot be determined.
    pub fn locate() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Other("unable to determine home directory".to_string()))?;

        Ok(Self {
            store_file: home.join(constants::DEBUG_KEYSTORE),
        })
    }

    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn store_password(&self) -> &'static str {
        constants::DEBUG_STORE_PASSWORD
    }

    pub fn key_alias(&self) -> &'static str {
        constants::DEBUG_KEY_ALIAS
    }

    pub fn key_password(&self) -> &'static str {
        constants::DEBUG_KEY_PASSWORD
    }
}

impl fmt::Debug for DebugIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugIdentity")
            .field("store_file", &self.store_file)
            .finish()
    }
}

/// How a build of a given variant will be signed.
#[derive(Debug)]
pub enum SigningChoice {
    /// Release: validated credentials from the project's key.properties.
    Release {
        project: Project,
        credentials: SigningCredentials,
    },
    /// Debug: the SDK default identity, no config file involved.
    DebugDefault(DebugIdentity),
}

impl SigningChoice {
    /// Resolve the signing setup for `variant`, starting from `start`.
    ///
    /// # Errors
    ///
    /// For release, any key.properties problem aborts the resolution.
    /// Debug resolution only fails when the home directory is unknown.
    pub fn resolve(variant: BuildVariant, start: impl AsRef<Path>) -> Result<Self> {
        match variant {
            BuildVariant::Debug => {
                let identity = DebugIdentity::locate()?;
                debug!(store_file = %identity.store_file().display(), "using debug identity");
                Ok(Self::DebugDefault(identity))
            }
            BuildVariant::Release => {
                let project = Project::discover(start);
                let credentials = project.load_credentials()?;
                Ok(Self::Release {
                    project,
                    credentials,
                })
            }
        }
    }
}

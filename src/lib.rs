//! Keyfob - Release-signing config for Android builds, checked before you ship.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create key.properties
//! │   ├── check         # Validate config (and optionally the keystore)
//! │   ├── show          # Display config with secrets redacted
//! │   ├── plan          # Resolve signing for a build variant
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── properties    # java-properties subset parser/writer
//!     ├── credentials   # Validated signing credentials
//!     ├── project       # Project root discovery, keystore checks
//!     └── variant       # Debug/release signing resolution
//! ```
//!
//! # Features
//!
//! - Fail-closed loading of key.properties for release builds
//! - Deterministic validation of the four required signing keys
//! - Debug builds resolve to the SDK debug keystore, never the config
//! - Secrets redacted from output and wiped from memory on drop

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::credentials::SigningCredentials;
pub use crate::core::project::{KeystoreInfo, Project};
pub use crate::core::properties::Properties;
pub use crate::core::variant::{BuildVariant, DebugIdentity, SigningChoice};

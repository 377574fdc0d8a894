//! Constants used throughout keyfob.
//!
//! Centralizes magic strings and configuration values.

/// Signing configuration file name (key.properties).
pub const PROPERTIES_FILE: &str = "key.properties";

/// Keystore path key.
pub const KEY_STORE_FILE: &str = "storeFile";

/// Keystore-level password key.
pub const KEY_STORE_PASSWORD: &str = "storePassword";

/// Signing key alias key.
pub const KEY_ALIAS: &str = "keyAlias";

/// Key-level password key.
pub const KEY_KEY_PASSWORD: &str = "keyPassword";

/// Gitignore entries to protect signing material.
///
/// Keeps key.properties and keystore binaries out of version control.
pub const GITIGNORE_ENTRIES: &[&str] = &["key.properties", "*.jks", "*.keystore"];

/// Default debug keystore path relative to HOME (~/.android/debug.keystore).
pub const DEBUG_KEYSTORE: &str = ".android/debug.keystore";

/// Store password of the SDK's debug keystore.
pub const DEBUG_STORE_PASSWORD: &str = "android";

/// Key alias inside the SDK's debug keystore.
pub const DEBUG_KEY_ALIAS: &str = "androiddebugkey";

/// Key password of the SDK's debug key.
pub const DEBUG_KEY_PASSWORD: &str = "android";

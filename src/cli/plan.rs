//! Plan command.
//!
//! Resolves how a build of the given variant will be signed, without
//! building anything. Release goes through key.properties and fails the
//! way the build would; debug never touches the config.

use tracing::info;

use crate::cli::output;
use crate::core::variant::{BuildVariant, SigningChoice};
use crate::error::Result;

/// Resolve and print the signing plan for a variant.
pub fn execute(variant: BuildVariant) -> Result<()> {
    let choice = SigningChoice::resolve(variant, std::env::current_dir()?)?;

    info!("resolved signing for {} build", variant);

    output::section(&format!("Signing plan ({})", variant));

    match &choice {
        SigningChoice::Release {
            project,
            credentials,
        } => {
            output::kv("source", project.properties_path().display());
            output::kv(
                "storeFile",
                credentials.resolved_store_file(project.root()).display(),
            );
            output::kv("keyAlias", credentials.key_alias());
        }
        SigningChoice::DebugDefault(identity) => {
            output::kv("source", "SDK debug keystore (no key.properties)");
            output::kv("storeFile", identity.store_file().display());
            output::kv("keyAlias", identity.key_alias());
            if !identity.store_file().exists() {
                println!();
                output::dimmed("debug keystore is created by the SDK on first build");
            }
        }
    }

    Ok(())
}

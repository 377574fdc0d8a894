//! Show command.
//!
//! Displays the signing config with both passwords redacted. `--reveal`
//! prints the real values for the rare moment you need to compare them
//! against a keystore tool.

use tracing::info;

use crate::cli::output;
use crate::core::project::Project;
use crate::error::Result;

const REDACTED: &str = "••••••••";

/// Display the signing config.
pub fn execute(reveal: bool, json: bool) -> Result<()> {
    let project = Project::discover(std::env::current_dir()?);
    let credentials = project.load_credentials()?;

    info!("showing config from {}", project.properties_path().display());

    let store_password = if reveal {
        credentials.store_password()
    } else {
        REDACTED
    };
    let key_password = if reveal {
        credentials.key_password()
    } else {
        REDACTED
    };

    if json {
        let result = serde_json::json!({
            "path": project.properties_path().display().to_string(),
            "storeFile": credentials.store_file().display().to_string(),
            "storePassword": store_password,
            "keyAlias": credentials.key_alias(),
            "keyPassword": key_password,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if reveal {
        output::warn("printing secret values in plain text");
    }

    output::section("Signing config");
    output::kv("path", project.properties_path().display());
    output::kv("storeFile", credentials.store_file().display());
    output::kv("storePassword", store_password);
    output::kv("keyAlias", credentials.key_alias());
    output::kv("keyPassword", key_password);

    if !reveal {
        println!();
        output::dimmed("pass --reveal to print secret values");
    }

    Ok(())
}

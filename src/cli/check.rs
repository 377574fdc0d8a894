//! Check command.
//!
//! Validates key.properties the same way a release build would, and
//! optionally verifies the keystore it points at. Exit status is the
//! answer; output is detail.

use tracing::info;

use crate::cli::output;
use crate::core::project::Project;
use crate::error::Result;

/// Validate the signing config, optionally the keystore too.
pub fn execute(keystore: bool, json: bool) -> Result<()> {
    let project = Project::discover(std::env::current_dir()?);
    let credentials = project.load_credentials()?;

    let keystore_info = if keystore {
        Some(project.check_keystore(&credentials)?)
    } else {
        None
    };

    info!(
        "signing config valid at {}",
        project.properties_path().display()
    );

    if json {
        let mut result = serde_json::json!({
            "valid": true,
            "path": project.properties_path().display().to_string(),
            "storeFile": credentials.store_file().display().to_string(),
            "keyAlias": credentials.key_alias(),
        });
        if let Some(info) = &keystore_info {
            result["keystore"] = serde_json::to_value(info)?;
        }
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::success(&format!(
        "{} is valid",
        output::path(&project.properties_path().display().to_string())
    ));
    output::kv("storeFile", credentials.store_file().display());
    output::kv("keyAlias", credentials.key_alias());

    if let Some(info) = &keystore_info {
        output::kv("keystore", info.path.display());
        output::kv("size", format!("{} bytes", info.size));
        output::kv("sha256", &info.sha256);
    }

    Ok(())
}

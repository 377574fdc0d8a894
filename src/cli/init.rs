//! Init command.
//!
//! Creates key.properties in the current directory, prompting for any
//! value not supplied as a flag. Passwords are prompted with hidden
//! input and never echoed.

use std::io::{self, IsTerminal};

use dialoguer::{Input, Password};
use tracing::info;

use crate::cli::output;
use crate::core::constants;
use crate::core::credentials::SigningCredentials;
use crate::core::project::Project;
use crate::core::properties::Properties;
use crate::error::{Error, ProjectError, Result};

/// Create key.properties for the current directory.
pub fn execute(
    store_file: Option<String>,
    store_password: Option<String>,
    key_alias: Option<String>,
    key_password: Option<String>,
    force: bool,
) -> Result<()> {
    let project = Project::at(std::env::current_dir()?);
    let path = project.properties_path();

    if path.exists() {
        if !force {
            return Err(ProjectError::AlreadyInitialized.into());
        }
        output::warn("overwriting existing key.properties");
    }

    let store_file = text_or_prompt(store_file, "storeFile (path to your keystore)", "store-file")?;
    let store_password = secret_or_prompt(store_password, "storePassword", "store-password")?;
    let key_alias = text_or_prompt(key_alias, "keyAlias", "key-alias")?;
    let key_password = secret_or_prompt(key_password, "keyPassword", "key-password")?;

    let props = Properties::from_pairs(
        vec![
            (constants::KEY_STORE_FILE.to_string(), store_file),
            (constants::KEY_STORE_PASSWORD.to_string(), store_password),
            (constants::KEY_ALIAS.to_string(), key_alias),
            (constants::KEY_KEY_PASSWORD.to_string(), key_password),
        ],
        path.clone(),
    );

    // Validate before writing so a bad init never leaves a broken file
    let _credentials = SigningCredentials::from_properties(&props)?;

    props.save()?;
    project.ensure_gitignore()?;

    info!("wrote {}", path.display());

    output::success(&format!("wrote {}", output::path("key.properties")));
    output::hint("run: keyfob check --keystore");
    Ok(())
}

/// Use the flag value, or prompt for visible text input.
fn text_or_prompt(value: Option<String>, prompt: &str, flag: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if io::stdin().is_terminal() => Ok(Input::new()
            .with_prompt(output::key(prompt))
            .interact_text()?),
        None => Err(Error::Other(format!(
            "--{} required in non-interactive mode",
            flag
        ))),
    }
}

/// Use the flag value, or prompt with hidden input.
fn secret_or_prompt(value: Option<String>, prompt: &str, flag: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if io::stdin().is_terminal() => Ok(Password::new()
            .with_prompt(output::key(prompt))
            .interact()?),
        None => Err(Error::Other(format!(
            "--{} required in non-interactive mode",
            flag
        ))),
    }
}

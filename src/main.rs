//! Keyfob - Release-signing config for Android builds, checked before you ship.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keyfob::cli::output;
use keyfob::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // KEYFOB_LOG overrides the --verbose default
    let filter = EnvFilter::try_from_env("KEYFOB_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keyfob=debug")
        } else {
            EnvFilter::new("keyfob=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Map common failures to a next step
        let error_msg = e.to_string();
        let suggestion = match &e {
            keyfob::error::Error::Signing(keyfob::error::SigningError::MissingConfigFile {
                ..
            }) => Some("run: keyfob init"),
            keyfob::error::Error::Signing(keyfob::error::SigningError::KeystoreNotFound {
                ..
            }) => Some("check storeFile in key.properties"),
            keyfob::error::Error::Project(keyfob::error::ProjectError::AlreadyInitialized) => {
                Some("run: keyfob show")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

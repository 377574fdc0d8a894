//! Command-line interface.

pub mod check;
pub mod completions;
pub mod init;
pub mod output;
pub mod plan;
pub mod show;

use clap::{Parser, Subcommand};

use crate::core::variant::BuildVariant;

/// Keyfob - Release-signing config for Android builds, checked before you ship.
#[derive(Parser)]
#[command(
    name = "keyfob",
    about = "Release-signing config for Android builds, checked before you ship",
    version,
    after_help = "Sign it right. Ship it once. 🔑"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create key.properties for this project
    Init {
        /// Keystore path to record as storeFile
        #[arg(long)]
        store_file: Option<String>,
        /// Keystore password (prompted if omitted)
        #[arg(long)]
        store_password: Option<String>,
        /// Signing key alias
        #[arg(long)]
        key_alias: Option<String>,
        /// Key password (prompted if omitted)
        #[arg(long)]
        key_password: Option<String>,
        /// Overwrite an existing key.properties
        #[arg(short, long)]
        force: bool,
    },

    /// Validate key.properties
    Check {
        /// Also verify the keystore file exists and fingerprint it
        #[arg(long)]
        keystore: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display the signing config with secrets redacted
    Show {
        /// Print secret values instead of redacting them
        #[arg(long)]
        reveal: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve how a build variant will be signed
    Plan {
        /// Build variant to resolve
        #[arg(long, value_enum, default_value = "release")]
        variant: VariantArg,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Build variant argument.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum VariantArg {
    Debug,
    Release,
}

impl From<VariantArg> for BuildVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Debug => BuildVariant::Debug,
            VariantArg::Release => BuildVariant::Release,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init {
            store_file,
            store_password,
            key_alias,
            key_password,
            force,
        } => init::execute(store_file, store_password, key_alias, key_password, force),
        Check { keystore, json } => check::execute(keystore, json),
        Show { reveal, json } => show::execute(reveal, json),
        Plan { variant } => plan::execute(variant.into()),
        Completions { shell } => completions::execute(shell),
    }
}

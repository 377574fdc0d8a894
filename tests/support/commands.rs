//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create a keyfob command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        self.cmd_in(self.dir.path())
    }

    /// Create a keyfob command running in an arbitrary directory.
    ///
    /// Used to exercise project discovery from subdirectories.
    pub fn cmd_in(&self, dir: &Path) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("keyfob").expect("failed to find keyfob binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.current_dir(dir);
        cmd
    }

    /// Shortcut for `keyfob init` with all four values as flags.
    pub fn init_cmd(
        &self,
        store_file: &str,
        store_password: &str,
        key_alias: &str,
        key_password: &str,
    ) -> Output {
        self.cmd()
            .args([
                "init",
                "--store-file",
                store_file,
                "--store-password",
                store_password,
                "--key-alias",
                key_alias,
                "--key-password",
                key_password,
            ])
            .output()
            .expect("failed to run keyfob init")
    }

    /// Shortcut for `keyfob init` with standard test values.
    pub fn init_default(&self) -> Output {
        self.init_cmd("release.jks", "pw1", "upload", "pw2")
    }

    /// Shortcut for `keyfob check`.
    pub fn check(&self) -> Output {
        self.cmd()
            .arg("check")
            .output()
            .expect("failed to run keyfob check")
    }

    /// Shortcut for `keyfob check --json`.
    pub fn check_json(&self) -> Output {
        self.cmd()
            .args(["check", "--json"])
            .output()
            .expect("failed to run keyfob check --json")
    }

    /// Shortcut for `keyfob check --keystore`.
    pub fn check_keystore(&self) -> Output {
        self.cmd()
            .args(["check", "--keystore"])
            .output()
            .expect("failed to run keyfob check --keystore")
    }

    /// Shortcut for `keyfob show`.
    pub fn show(&self) -> Output {
        self.cmd()
            .arg("show")
            .output()
            .expect("failed to run keyfob show")
    }

    /// Shortcut for `keyfob show --reveal`.
    pub fn show_reveal(&self) -> Output {
        self.cmd()
            .args(["show", "--reveal"])
            .output()
            .expect("failed to run keyfob show --reveal")
    }

    /// Shortcut for `keyfob show --json`.
    pub fn show_json(&self) -> Output {
        self.cmd()
            .args(["show", "--json"])
            .output()
            .expect("failed to run keyfob show --json")
    }

    /// Shortcut for `keyfob show --reveal --json`.
    pub fn show_reveal_json(&self) -> Output {
        self.cmd()
            .args(["show", "--reveal", "--json"])
            .output()
            .expect("failed to run keyfob show --reveal --json")
    }

    /// Shortcut for `keyfob plan --variant <variant>`.
    pub fn plan(&self, variant: &str) -> Output {
        self.cmd()
            .args(["plan", "--variant", variant])
            .output()
            .expect("failed to run keyfob plan")
    }

    /// Shortcut for `keyfob plan` with the default variant.
    pub fn plan_default(&self) -> Output {
        self.cmd()
            .arg("plan")
            .output()
            .expect("failed to run keyfob plan")
    }
}

#![allow(clippy::unwrap_used)] // Tests use unwrap for simplicity

use anyhow::{Context, Result};
use assert_fs::TempDir;
use assert_fs::prelude::*;

/// Test environment using assert_fs for simplified setup and cleanup
///
/// `work_dir` is where the binary runs; `tools_dir` holds the configuration file
/// and any fake executables, so nothing from the real home directory leaks in.
pub struct CliTestEnvironment {
    pub work_dir: assert_fs::fixture::ChildPath,
    pub tools_dir: assert_fs::fixture::ChildPath,
    _temp_dir: TempDir, // Keep temp_dir private to ensure cleanup, but don't expose it
}

impl CliTestEnvironment {
    /// Creates a new test environment with empty work and tools directories
    ///
    /// # Errors
    /// Returns an error if the temporary directories cannot be created
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
        let work_dir = temp_dir.child("work");
        let tools_dir = temp_dir.child("tools");

        work_dir.create_dir_all()?;
        tools_dir.create_dir_all()?;

        Ok(Self {
            work_dir,
            tools_dir,
            _temp_dir: temp_dir,
        })
    }

    /// Path of the configuration file handed to the binary
    pub fn config_file(&self) -> assert_fs::fixture::ChildPath {
        self.tools_dir.child("ts-cli.toml")
    }

    /// Writes a fake executable script into the tools directory and returns its path
    ///
    /// # Errors
    /// Returns an error if the script cannot be written or made executable
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, body: &str) -> Result<std::path::PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        let script = self.tools_dir.child(name);
        script.write_str(&format!("#!/bin/sh\n{body}\n"))?;
        let mut perms = std::fs::metadata(script.path())?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(script.path(), perms)?;
        Ok(script.to_path_buf())
    }

    /// Points the binary at the given npm and npx executables
    ///
    /// # Errors
    /// Returns an error if the configuration file cannot be written
    pub fn use_tools(&self, npm: &std::path::Path, npx: &std::path::Path) -> Result<()> {
        self.config_file().write_str(&format!(
            "[tools]\nnpm = {:?}\nnpx = {:?}\n",
            npm.to_string_lossy(),
            npx.to_string_lossy()
        ))?;
        Ok(())
    }

    /// Execute a non-interactive CLI command with proper environment setup
    ///
    /// # Errors
    /// Returns an error if the command setup fails
    pub fn run_command(&self, args: &[&str]) -> Result<assert_cmd::Command> {
        let mut cmd =
            assert_cmd::Command::cargo_bin("ts-cli").context("Failed to find ts-cli binary")?;

        cmd.current_dir(self.work_dir.path())
            .env("TS_CLI_CONFIG", self.config_file().path())
            .env_remove("TS_CLI_LOG");

        cmd.args(args);
        Ok(cmd)
    }

    /// Get the path of a generated project inside the work directory
    pub fn project_path(&self, name: &str) -> assert_fs::fixture::ChildPath {
        self.work_dir.child(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predicates::prelude::*;

    #[test]
    fn test_cli_test_environment_creation() -> Result<()> {
        let env = CliTestEnvironment::new()?;

        env.work_dir.assert(predicate::path::is_dir());
        env.tools_dir.assert(predicate::path::is_dir());
        env.config_file().assert(predicate::path::missing());

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_use_tools_writes_config() -> Result<()> {
        let env = CliTestEnvironment::new()?;
        let npm = env.fake_tool("npm", "exit 0")?;
        let npx = env.fake_tool("npx", "exit 0")?;

        env.use_tools(&npm, &npx)?;
        env.config_file()
            .assert(predicate::str::contains("[tools]"))
            .assert(predicate::str::contains("npm = "));

        Ok(())
    }
}

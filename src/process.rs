use anyhow::Result;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::ScaffoldError;
use crate::traits::CommandRunner;

/// Runs programs for real with inherited stdio
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let command = render_command(program, args);
        log::debug!("Running: {} (in {})", command, cwd.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ScaffoldError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ScaffoldError::ExternalProcess {
                command,
                code: status.code(),
            }
            .into());
        }
        Ok(())
    }
}

/// Joins a program and its arguments the way a user would type them
#[must_use]
pub fn render_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

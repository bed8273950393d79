use anyhow::Result;
use std::path::Path;

/// Trait for running external tools to enable mocking in tests
///
/// Implementations block until the program exits and leave its output on the
/// terminal.
pub trait CommandRunner {
    /// Runs `program` with `args` inside `cwd`
    ///
    /// # Errors
    /// Returns `ScaffoldError::Spawn` if the program cannot be started and
    /// `ScaffoldError::ExternalProcess` if it exits unsuccessfully
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

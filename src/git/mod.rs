use anyhow::{Context, Result};
use git2::Repository;
use std::path::Path;

/// Initializes a git repository at `path` unless one already exists there
///
/// Hook managers install their hooks into `.git/hooks`, so the project needs a
/// repository before they are added.
///
/// # Errors
/// Returns an error if the repository cannot be created
pub fn init_repository(path: &Path) -> Result<()> {
    if Repository::open(path).is_ok() {
        log::debug!("Git repository already present at {}", path.display());
        return Ok(());
    }

    Repository::init(path)
        .with_context(|| format!("Failed to initialize git repository at {}", path.display()))?;
    log::info!("Initialized git repository at {}", path.display());
    Ok(())
}

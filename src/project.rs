use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::manifest::Manifest;
use crate::traits::CommandRunner;

/// The project being generated, plus the means to run tools inside it
///
/// All commands and file writes target `dir`; the process working directory is
/// never changed.
pub struct Project<'a> {
    dir: PathBuf,
    runner: &'a dyn CommandRunner,
    npm: String,
    npx: String,
}

impl<'a> Project<'a> {
    pub fn new(dir: PathBuf, runner: &'a dyn CommandRunner, config: &ScaffoldConfig) -> Self {
        Self {
            dir,
            runner,
            npm: config.npm().to_string(),
            npx: config.npx().to_string(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Runs the package manager in the project directory
    ///
    /// # Errors
    /// Returns an error if the command fails to start or exits non-zero
    pub fn npm(&self, args: &[&str]) -> Result<()> {
        self.runner.run(&self.npm, args, &self.dir)
    }

    /// Runs the package runner in the project directory
    ///
    /// # Errors
    /// Returns an error if the command fails to start or exits non-zero
    pub fn npx(&self, args: &[&str]) -> Result<()> {
        self.runner.run(&self.npx, args, &self.dir)
    }

    /// `npm i <packages> -D`
    ///
    /// # Errors
    /// Returns an error if the install fails
    pub fn install_dev(&self, packages: &[&str]) -> Result<()> {
        let mut args = Vec::with_capacity(packages.len() + 2);
        args.push("i");
        args.extend_from_slice(packages);
        args.push("-D");
        self.npm(&args)
    }

    /// Loads `package.json`, applies `edit` and writes it back
    ///
    /// # Errors
    /// Returns an error if the manifest is missing, malformed or cannot be written
    pub fn update_manifest<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Manifest),
    {
        let mut manifest = Manifest::load(&self.dir)?;
        edit(&mut manifest);
        manifest.save()
    }

    /// Writes a file relative to the project root, replacing any existing one
    ///
    /// # Errors
    /// Returns `ScaffoldError::FileWrite` if the file cannot be written
    pub fn write_file(&self, relative: &str, contents: &str) -> Result<()> {
        let path = self.dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ScaffoldError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, contents).map_err(|source| ScaffoldError::FileWrite {
            path: path.clone(),
            source,
        })?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}

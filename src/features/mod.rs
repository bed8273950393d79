//! Optional tooling the user can add to a generated project.
//!
//! The catalog is closed: every [`Feature`] maps to its installer through a `match`,
//! and names coming back from the prompt are parsed into `Feature` values before
//! anything is installed. Selections iterate in catalog order no matter what order the
//! user picked them in.

mod build;
mod hooks;
mod installers;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::Result;

use crate::error::ScaffoldError;
use crate::project::Project;

pub use build::{build_command, install_build};
pub use hooks::{COMMIT_MSG_COMMAND, COMMIT_MSG_HOOK, HookPlan, install_hooks};

/// A selectable tooling feature, declared in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Eslint,
    Prettier,
    Cz,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Eslint, Feature::Prettier, Feature::Cz];

    /// Name shown in the prompt
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Feature::Eslint => "ESLint",
            Feature::Prettier => "Prettier",
            Feature::Cz => "CZ",
        }
    }

    /// Script this feature contributes to pre-commit and build checks, if any
    #[must_use]
    pub fn check_script(self) -> Option<&'static str> {
        match self {
            Feature::Eslint => Some(installers::ESLINT_SCRIPT_NAME),
            Feature::Prettier => Some(installers::PRETTIER_SCRIPT_NAME),
            Feature::Cz => None,
        }
    }

    /// Installs this feature into the project
    ///
    /// # Errors
    /// Returns an error if a package install fails or a file cannot be written
    pub fn install(self, project: &Project<'_>) -> Result<()> {
        log::info!("Installing feature {}", self);
        match self {
            Feature::Eslint => installers::install_eslint(project),
            Feature::Prettier => installers::install_prettier(project),
            Feature::Cz => installers::install_cz(project),
        }
    }

    /// Prompt choices, in catalog order
    #[must_use]
    pub fn choices() -> Vec<String> {
        Self::ALL.iter().map(|f| f.name().to_string()).collect()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| ScaffoldError::UnknownFeature(s.to_string()))
    }
}

/// The set of features the user checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSelection(BTreeSet<Feature>);

impl FeatureSelection {
    /// Parses prompt answers into a selection
    ///
    /// # Errors
    /// Returns `ScaffoldError::UnknownFeature` for the first name outside the catalog
    pub fn from_names<I, S>(names: I) -> Result<Self, ScaffoldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse::<Feature>())
            .collect()
    }

    #[must_use]
    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    /// Features in catalog order
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }

    /// Scripts of the selected features that act as checks, in catalog order
    #[must_use]
    pub fn check_scripts(&self) -> Vec<&'static str> {
        self.iter().filter_map(Feature::check_script).collect()
    }
}

impl FromIterator<Feature> for FeatureSelection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

use anyhow::Result;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

use super::{Feature, FeatureSelection};
use crate::git;
use crate::project::Project;

pub const COMMIT_MSG_HOOK: &str = "commit-msg";
pub const COMMIT_MSG_COMMAND: &str = "commitlint -E HUSKY_GIT_PARAMS";
const PRE_COMMIT_HOOK: &str = "pre-commit";
const PRE_COMMIT_COMMAND: &str = "lint-staged";
const STAGED_GLOB: &str = "*.ts";

/// Git hooks and staged-file checks derived from a selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookPlan {
    /// Hook name to command, beyond the pre-commit hook
    pub hooks: BTreeMap<String, String>,
    /// Scripts run against staged files, lint before format
    pub checks: Vec<String>,
}

impl HookPlan {
    #[must_use]
    pub fn from_selection(selection: &FeatureSelection) -> Self {
        let mut hooks = BTreeMap::new();
        if selection.contains(Feature::Cz) {
            hooks.insert(COMMIT_MSG_HOOK.to_string(), COMMIT_MSG_COMMAND.to_string());
        }

        let checks = selection
            .check_scripts()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self { hooks, checks }
    }

    /// The `husky` manifest entry
    #[must_use]
    pub fn husky_config(&self) -> Value {
        let mut hooks = Map::new();
        if !self.checks.is_empty() {
            hooks.insert(
                PRE_COMMIT_HOOK.to_string(),
                Value::String(PRE_COMMIT_COMMAND.to_string()),
            );
        }
        for (hook, command) in &self.hooks {
            hooks.insert(hook.clone(), Value::String(command.clone()));
        }
        json!({ "hooks": hooks })
    }

    /// The `lint-staged` manifest entry, absent when there is nothing to check
    #[must_use]
    pub fn lint_staged_config(&self) -> Option<Value> {
        if self.checks.is_empty() {
            return None;
        }
        let commands: Vec<Value> = self
            .checks
            .iter()
            .map(|check| Value::String(format!("npm run {check}")))
            .collect();
        let mut staged = Map::new();
        staged.insert(STAGED_GLOB.to_string(), Value::Array(commands));
        Some(Value::Object(staged))
    }
}

/// Sets up husky and lint-staged according to `plan`
///
/// Runs for every project; with an empty plan it still installs the packages and
/// writes an empty hook table.
///
/// # Errors
/// Returns an error if git initialization, the install or the manifest update fails
pub fn install_hooks(project: &Project<'_>, plan: &HookPlan) -> Result<()> {
    log::info!(
        "Installing git hooks ({} hook(s), {} check(s))",
        plan.hooks.len(),
        plan.checks.len()
    );
    git::init_repository(project.dir())?;
    project.install_dev(&["husky@4", "lint-staged"])?;
    project.update_manifest(|manifest| {
        manifest.set("husky", plan.husky_config());
        if let Some(staged) = plan.lint_staged_config() {
            manifest.set("lint-staged", staged);
        }
    })
}

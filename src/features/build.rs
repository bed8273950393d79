use anyhow::Result;

use super::FeatureSelection;
use crate::project::Project;

/// Chains the selected checks in front of a clean compile
#[must_use]
pub fn build_command(selection: &FeatureSelection) -> String {
    selection
        .check_scripts()
        .into_iter()
        .map(|script| format!("npm run {script}"))
        .chain(["rm -rf lib".to_string(), "tsc --build".to_string()])
        .collect::<Vec<_>>()
        .join(" && ")
}

/// Adds the `build` script; runs regardless of the selection
///
/// # Errors
/// Returns an error if the manifest cannot be updated
pub fn install_build(project: &Project<'_>, selection: &FeatureSelection) -> Result<()> {
    let command = build_command(selection);
    log::info!("Configuring build script: {}", command);
    project.update_manifest(|manifest| {
        manifest.set_script("build:comment", "check and compile the project into lib");
        manifest.set_script("build", &command);
    })
}

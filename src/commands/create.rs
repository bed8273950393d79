use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::features::{Feature, FeatureSelection, HookPlan, install_build, install_hooks};
use crate::manifest::{TsConfig, file_exists};
use crate::output::{self, ConsoleOutput, Output};
use crate::process::SystemRunner;
use crate::project::Project;
use crate::selection::{RealSelectionProvider, SelectionProvider};
use crate::traits::CommandRunner;

pub const FEATURE_PROMPT: &str = "Check the features needed for your project";
pub const DEV_SCRIPT: &str = "ts-node-dev --respawn --transpile-only src/index.ts";
pub const DEV_COMMENT: &str = "start the development environment";

/// External collaborators the scaffold sequence talks to
pub struct ScaffoldContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub selection: &'a dyn SelectionProvider,
    pub output: &'a dyn Output,
    pub config: &'a ScaffoldConfig,
}

/// Scaffolds `name` under the current directory with the real terminal and tools
///
/// # Errors
/// Returns an error if the name is taken, a tool fails or a file cannot be handled;
/// nothing already created is removed
pub fn create_project(name: &str) -> Result<()> {
    let base_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config = ScaffoldConfig::load()?;
    let output = ConsoleOutput::new();
    let ctx = ScaffoldContext {
        runner: &SystemRunner,
        selection: &RealSelectionProvider,
        output: &output,
        config: &config,
    };
    create_project_with(&ctx, &base_dir, name)
}

/// Test version that accepts injected collaborators and a base directory
///
/// # Errors
/// Returns `ScaffoldError::NameCollision` if `name` exists in `base_dir`, and otherwise
/// the first failure from a tool, the prompt or a file operation
pub fn create_project_with(ctx: &ScaffoldContext<'_>, base_dir: &Path, name: &str) -> Result<()> {
    let project_dir = ensure_name_available(base_dir, name)?;
    let project = Project::new(project_dir, ctx.runner, ctx.config);

    log::info!("Creating project directory {}", project.dir().display());
    init_project_dir(&project, name)?;

    log::info!("Installing TypeScript");
    install_typescript(&project)?;

    log::info!("Installing Node.js type declarations");
    install_types_node(&project)?;

    log::info!("Prompting for features");
    let selection = select_features(ctx.selection, ctx.output)?;
    install_features(&project, &selection)?;

    log::info!("Installing development environment");
    install_dev_environment(&project)?;

    print_completion(ctx.output, name);
    Ok(())
}

/// Fails if `name` already exists directly in `base_dir`
///
/// # Errors
/// Returns `ScaffoldError::NameCollision` when the name is taken
pub fn ensure_name_available(base_dir: &Path, name: &str) -> Result<PathBuf> {
    let path = base_dir.join(name);
    if file_exists(base_dir, name) {
        return Err(ScaffoldError::NameCollision { path }.into());
    }
    Ok(path)
}

fn init_project_dir(project: &Project<'_>, name: &str) -> Result<()> {
    std::fs::create_dir(project.dir()).map_err(|source| ScaffoldError::FileWrite {
        path: project.dir().to_path_buf(),
        source,
    })?;
    project.npm(&["init", "-y"])?;
    project.update_manifest(|manifest| {
        manifest.set("name", name);
        manifest.set("description", name);
    })
}

/// Installs the compiler, then replaces its generated config with ours
fn install_typescript(project: &Project<'_>) -> Result<()> {
    project.install_dev(&["typescript"])?;
    project.npx(&["tsc", "--init"])?;
    TsConfig::default().write_to(project.dir())?;
    project.write_file("src/index.ts", "")
}

fn install_types_node(project: &Project<'_>) -> Result<()> {
    project.install_dev(&["@types/node"])
}

/// Shows the banner and asks which features to add
///
/// # Errors
/// Returns an error if the prompt fails or returns a name outside the catalog
pub fn select_features(
    provider: &dyn SelectionProvider,
    out: &dyn Output,
) -> Result<FeatureSelection> {
    let title = format!("TS CLI v{}", env!("CARGO_PKG_VERSION"));
    out.clear();
    out.line(&output::banner(&title));
    out.line("Start initializing the project:");
    out.line("");

    let names = provider.select_many(FEATURE_PROMPT, Feature::choices())?;
    let selection = FeatureSelection::from_names(&names)?;
    log::info!("Selected features: {:?}", selection);
    Ok(selection)
}

/// Installs the selected features in catalog order, then hooks and build
///
/// # Errors
/// Returns an error as soon as any installer fails
pub fn install_features(project: &Project<'_>, selection: &FeatureSelection) -> Result<()> {
    for feature in selection.iter() {
        feature.install(project)?;
    }
    install_hooks(project, &HookPlan::from_selection(selection))?;
    install_build(project, selection)
}

fn install_dev_environment(project: &Project<'_>) -> Result<()> {
    project.install_dev(&["ts-node-dev"])?;
    project.update_manifest(|manifest| {
        manifest.set_script("dev:comment", DEV_COMMENT);
        manifest.set_script("dev", DEV_SCRIPT);
    })
}

fn print_completion(out: &dyn Output, name: &str) {
    out.line(&format!(
        "Successfully created project {}",
        output::highlight(name)
    ));
    out.line("Get started with the following commands:");
    out.line("");
    out.line(&output::command_hint(&format!("cd {name}")));
    out.line(&output::command_hint("npm run dev"));
    out.line("");
}

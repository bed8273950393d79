use anyhow::Result;

use crate::project::Project;

pub(crate) const ESLINT_SCRIPT_NAME: &str = "eslint";
pub(crate) const PRETTIER_SCRIPT_NAME: &str = "prettier";

pub const ESLINT_SCRIPT: &str = "eslint --fix src --ext .ts --max-warnings=0";
pub const PRETTIER_SCRIPT: &str = "prettier --loglevel warn --write \"src/**/*.ts\"";
pub const COMMIT_SCRIPT: &str = "cz";

const ESLINTRC: &str = include_str!("templates/eslintrc.js");
const ESLINTIGNORE: &str = include_str!("templates/eslintignore");
const PRETTIERRC: &str = include_str!("templates/prettierrc.js");
const COMMITLINT_CONFIG: &str = include_str!("templates/commitlint.config.js");

pub(crate) fn install_eslint(project: &Project<'_>) -> Result<()> {
    project.install_dev(&[
        "eslint",
        "@typescript-eslint/parser",
        "@typescript-eslint/eslint-plugin",
    ])?;
    project.write_file(".eslintrc.js", ESLINTRC)?;
    project.write_file(".eslintignore", ESLINTIGNORE)?;
    project.update_manifest(|manifest| {
        manifest.set_script("eslint:comment", "lint and fix the files under src");
        manifest.set_script(ESLINT_SCRIPT_NAME, ESLINT_SCRIPT);
    })
}

pub(crate) fn install_prettier(project: &Project<'_>) -> Result<()> {
    project.install_dev(&["prettier"])?;
    project.write_file(".prettierrc.js", PRETTIERRC)?;
    project.update_manifest(|manifest| {
        manifest.set_script("prettier:comment", "format the files under src");
        manifest.set_script(PRETTIER_SCRIPT_NAME, PRETTIER_SCRIPT);
    })
}

/// Commitizen prompts for commit messages, commitlint enforces them
pub(crate) fn install_cz(project: &Project<'_>) -> Result<()> {
    project.npx(&[
        "commitizen",
        "init",
        "cz-conventional-changelog",
        "--save",
        "--save-exact",
    ])?;
    project.install_dev(&["@commitlint/cli", "@commitlint/config-conventional"])?;
    project.write_file("commitlint.config.js", COMMITLINT_CONFIG)?;
    project.update_manifest(|manifest| {
        manifest.set_script(
            "commit:comment",
            "commit using the conventional message prompt",
        );
        manifest.set_script("commit", COMMIT_SCRIPT);
    })
}

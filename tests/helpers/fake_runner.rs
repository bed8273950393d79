#![allow(clippy::unwrap_used)] // Tests use unwrap for simplicity

use anyhow::Result;
use serde_json::{Map, Value, json};
use std::cell::RefCell;
use std::path::Path;

use ts_cli::error::ScaffoldError;
use ts_cli::manifest::{read_json, write_json};
use ts_cli::process::render_command;
use ts_cli::traits::CommandRunner;

/// Stands in for npm and npx without touching the network
///
/// It writes the files the real tools would write so the steps that follow can read
/// them, and records every command line it was asked to run.
#[derive(Default)]
pub struct FakeRunner {
    commands: RefCell<Vec<String>>,
    fail_on: Option<(String, i32)>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the first command whose rendered line starts with `prefix`
    pub fn failing_on(prefix: &str, code: i32) -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            fail_on: Some((prefix.to_string(), code)),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    pub fn position(&self, command: &str) -> Option<usize> {
        self.commands.borrow().iter().position(|c| c == command)
    }

    fn simulate(program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        match (program, args) {
            ("npm", ["init", "-y"]) => {
                let name = cwd.file_name().unwrap().to_string_lossy().to_string();
                write_json(
                    &cwd.join("package.json"),
                    &json!({
                        "name": name,
                        "version": "1.0.0",
                        "description": "",
                        "main": "index.js",
                        "scripts": {
                            "test": "echo \"Error: no test specified\" && exit 1"
                        },
                        "keywords": [],
                        "author": "",
                        "license": "ISC"
                    }),
                )
            }
            ("npm", ["i", packages @ .., "-D"]) => {
                let path = cwd.join("package.json");
                let mut manifest: Map<String, Value> = read_json(&path)?;
                let deps = manifest
                    .entry("devDependencies")
                    .or_insert_with(|| json!({}));
                for package in packages.iter() {
                    deps[package_name(package)] = json!("^1.0.0");
                }
                write_json(&path, &manifest)
            }
            ("npx", ["tsc", "--init"]) => write_json(
                &cwd.join("tsconfig.json"),
                &json!({"compilerOptions": {"target": "es5", "strict": true}}),
            ),
            ("npx", ["commitizen", "init", ..]) => {
                let path = cwd.join("package.json");
                let mut manifest: Map<String, Value> = read_json(&path)?;
                manifest.insert(
                    "config".to_string(),
                    json!({"commitizen": {"path": "./node_modules/cz-conventional-changelog"}}),
                );
                write_json(&path, &manifest)
            }
            _ => Ok(()),
        }
    }
}

/// Strips a version suffix such as `husky@4`, keeping scoped names intact
fn package_name(spec: &str) -> &str {
    match spec.rfind('@') {
        Some(0) | None => spec,
        Some(at) => &spec[..at],
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let command = render_command(program, args);
        self.commands.borrow_mut().push(command.clone());

        if let Some((prefix, code)) = &self.fail_on {
            if command.starts_with(prefix.as_str()) {
                return Err(ScaffoldError::ExternalProcess {
                    command,
                    code: Some(*code),
                }
                .into());
            }
        }

        Self::simulate(program, args, cwd)
    }
}

//! JSON documents written into the generated project.
//!
//! [`Manifest`] wraps `package.json` for read-modify-write cycles; [`TsConfig`] is the
//! fixed compiler configuration that replaces whatever `tsc --init` produced. Key order
//! is kept as read so that rewriting a file only changes what was touched.

use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

pub const MANIFEST_FILE: &str = "package.json";
pub const TSCONFIG_FILE: &str = "tsconfig.json";

/// Checks whether `name` exists directly inside `base`
///
/// Only the immediate directory is inspected. Symlinks count even when dangling.
#[must_use]
pub fn file_exists(base: &Path, name: &str) -> bool {
    std::fs::symlink_metadata(base.join(name)).is_ok()
}

/// Reads and parses a JSON file
///
/// # Errors
/// Returns `ScaffoldError::FileRead` if the file is missing or unreadable and
/// `ScaffoldError::Json` if it does not parse into `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| ScaffoldError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&content).map_err(|source| ScaffoldError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(value)
}

/// Writes a value as pretty-printed JSON, replacing any existing file
///
/// # Errors
/// Returns `ScaffoldError::Json` if serialization fails and
/// `ScaffoldError::FileWrite` if the file cannot be written
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| ScaffoldError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json + "\n").map_err(|source| ScaffoldError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// The generated project's `package.json`
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    doc: Map<String, Value>,
}

impl Manifest {
    /// Loads `package.json` from a project directory
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or not a JSON object
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(MANIFEST_FILE);
        let doc: Map<String, Value> = read_json(&path)?;
        Ok(Self { path, doc })
    }

    /// Writes the document back to where it was loaded from
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save(&self) -> Result<()> {
        write_json(&self.path, &self.doc)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.doc.get(key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.doc.insert(key.to_string(), value.into());
    }

    /// Sets `scripts.<name>`, creating the `scripts` object when needed
    pub fn set_script(&mut self, name: &str, command: &str) {
        let scripts = self
            .doc
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));
        if !scripts.is_object() {
            *scripts = Value::Object(Map::new());
        }
        if let Value::Object(scripts) = scripts {
            scripts.insert(name.to_string(), Value::String(command.to_string()));
        }
    }

    #[must_use]
    pub fn script(&self, name: &str) -> Option<&str> {
        self.doc
            .get("scripts")
            .and_then(|scripts| scripts.get(name))
            .and_then(Value::as_str)
    }
}

/// Fixed `tsconfig.json` contents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    pub compile_on_save: bool,
    pub compiler_options: CompilerOptions,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub target: String,
    pub module: String,
    pub module_resolution: String,
    pub experimental_decorators: bool,
    pub emit_decorator_metadata: bool,
    pub inline_source_map: bool,
    pub no_implicit_this: bool,
    pub no_unused_locals: bool,
    pub strip_internal: bool,
    pub pretty: bool,
    pub declaration: bool,
    pub out_dir: String,
    pub base_url: String,
    pub paths: BTreeMap<String, Vec<String>>,
}

impl Default for TsConfig {
    fn default() -> Self {
        Self {
            compile_on_save: true,
            compiler_options: CompilerOptions {
                target: "ES2018".to_string(),
                module: "commonjs".to_string(),
                module_resolution: "node".to_string(),
                experimental_decorators: true,
                emit_decorator_metadata: true,
                inline_source_map: true,
                no_implicit_this: true,
                no_unused_locals: true,
                strip_internal: true,
                pretty: true,
                declaration: true,
                out_dir: "lib".to_string(),
                base_url: "./".to_string(),
                paths: BTreeMap::from([("*".to_string(), vec!["src/*".to_string()])]),
            },
            exclude: vec!["lib".to_string(), "node_modules".to_string()],
        }
    }
}

impl TsConfig {
    /// Overwrites `tsconfig.json` in the project directory
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn write_to(&self, project_dir: &Path) -> Result<()> {
        write_json(&project_dir.join(TSCONFIG_FILE), self)
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a scaffolding run.
///
/// These travel inside `anyhow::Error` so callers can add context freely; the
/// binary downcasts to recover the process exit code.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("{} already exists", .path.display())]
    NameCollision { path: PathBuf },

    #[error("`{command}` exited with {}", describe_code(.code))]
    ExternalProcess { command: String, code: Option<i32> },

    #[error("failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown feature '{0}'")]
    UnknownFeature(String),

    #[error("feature selection failed: {0}")]
    Prompt(String),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl ScaffoldError {
    /// Exit code the process should terminate with.
    ///
    /// External process failures hand back the child's own status when there is one.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::ExternalProcess {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Looks through an error chain for a [`ScaffoldError`] and returns its exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ScaffoldError>())
        .map_or(1, ScaffoldError::exit_code)
}

// Error types and user-friendly error messages
//
// Library code returns the typed errors below. The binary wraps them with
// anyhow context and, for startup failures, prints an actionable message.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while loading one of the static tables at startup
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {} file {}", what, path.display())]
    Io {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {} file {}", what, path.display())]
    Parse {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Read and deserialize a JSON table, tagging failures with `what`
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(
    path: &Path,
    what: &'static str,
) -> Result<T, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        what,
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        what,
        path: path.to_path_buf(),
        source,
    })
}

/// Failure in the offline dataset preparation utilities
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: missing required column '{}'", path.display(), column)]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}: row {}: label '{}' is not an integer", path.display(), row, value)]
    InvalidLabel {
        path: PathBuf,
        row: usize,
        value: String,
    },
}

/// Format a startup load failure with helpful suggestions
pub fn startup_load_error(error: &LoadError) -> String {
    let cause = match error {
        LoadError::Io { source, .. } => source.to_string(),
        LoadError::Parse { source, .. } => source.to_string(),
    };

    format!(
        "{}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check the file exists:\n\
           \x1b[36mls -la {}\x1b[0m\n\n\
        2. Validate the JSON:\n\
           \x1b[36mpython3 -m json.tool {}\x1b[0m\n\n\
        3. Point the data paths elsewhere in:\n\
           \x1b[36m~/.solace/config.toml\x1b[0m  (or pass --config)",
        error,
        cause,
        error.path().display(),
        error.path().display()
    )
}

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(path: &Path, error: &str) -> String {
    format!(
        "Failed to parse config file {}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat {}\x1b[0m\n\n\
        2. Common mistakes:\n\
           • Missing quotes around strings\n\
           • Port given as a string instead of a number\n\
           • Unclosed brackets []",
        path.display(),
        error,
        path.display()
    )
}

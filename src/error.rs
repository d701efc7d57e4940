//! Error types for the import pipeline
//!
//! Every variant is fatal for the run. Entries that merely cannot be
//! classified are skipped by the readers and never surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Neither a browser nor an input format was given
    #[error("Must specify either browser or input format")]
    NoInputFormat,

    /// Home or application data directory could not be determined
    #[error("Could not determine {0} directory")]
    NoProfileRoot(&'static str),

    /// Profile discovery found no directory containing the fragment
    #[error("Profile not found: no directory matching '{fragment}' in {}", format_roots(.searched))]
    ProfileNotFound {
        fragment: String,
        searched: Vec<PathBuf>,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read database {}: {source}", .path.display())]
    Database {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ImportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn database(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::Database {
            path: path.into(),
            source,
        }
    }
}

fn format_roots(roots: &[PathBuf]) -> String {
    if roots.is_empty() {
        return "(no profile directories)".to_string();
    }
    roots
        .iter()
        .map(|r| r.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ImportError>;

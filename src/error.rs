//! Error types for building a tree snapshot.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Error, Debug)]
pub enum TreeError {
    /// The root does not exist or is not a directory.
    #[error("{}: {reason}", path.display())]
    Path {
        path: PathBuf,
        reason: &'static str,
        #[source]
        source: Option<io::Error>,
    },

    /// Listing a directory failed during the walk.
    #[error("cannot list {}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The filename patterns could not be compiled into a matcher.
    #[error("invalid filename patterns")]
    Patterns(#[from] aho_corasick::BuildError),
}

impl TreeError {
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::Path {
            path: path.into(),
            reason: "Not a directory",
            source: None,
        }
    }

    pub fn inaccessible(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Path {
            path: path.into(),
            reason: "cannot access",
            source: Some(source),
        }
    }

    pub fn traversal(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Traversal {
            path: path.into(),
            source,
        }
    }
}

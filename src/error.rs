//! Error types for launching terminals and resolving directories.

use std::path::PathBuf;

/// Why a single terminal candidate failed to launch.
///
/// These never reach the user directly: the cascade absorbs them and moves on
/// to the next candidate. They are kept around for logging and for the
/// single-profile error message.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The executable is not on the search path.
    #[error("`{program}` was not found on PATH")]
    NotFound {
        /// Program that was looked up.
        program: String,
    },
    /// The executable exists but could not be executed.
    #[error("permission denied launching `{program}`")]
    PermissionDenied {
        /// Program that was denied.
        program: String,
    },
    /// Any other spawn failure.
    #[error("failed to launch `{program}`: {source}")]
    Io {
        /// Program being launched.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Classify a spawn-time I/O error for `program`.
    pub fn from_spawn(program: &str, err: std::io::Error) -> Self {
        let program = program.to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { program },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { program },
            _ => Self::Io { program, source: err },
        }
    }
}

/// Failure to derive a target directory from the invocation context.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// Neither a selected path nor an active file was supplied.
    #[error("No directory context: pass a path or --active-file")]
    NoContext,
    /// The path does not exist or its parent is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// The path cannot be handed to a terminal as a string.
    #[error("Path contains non-UTF-8 characters: {}", .0.display())]
    NotUtf8(PathBuf),
    /// The current directory could not be read to absolutize a relative path.
    #[error("Could not resolve {}: {source}", .path.display())]
    Absolute {
        /// Path being absolutized.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

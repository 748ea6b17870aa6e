//! Where a terminal should open.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::TargetError;

#[cfg(test)]
mod tests;

/// An absolute, existing directory a terminal should open in.
///
/// Held as a `String` because every consumer substitutes it into an argument
/// list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory(String);

impl TargetDirectory {
    /// Wrap a path that is already known to be a directory.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The directory as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The directory as a path.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for TargetDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Work out which directory to open from what the user invoked us with.
///
/// A selected directory wins. A selected file resolves to its parent. Without
/// a selection the active file's parent is used.
pub fn resolve_target(
    selected: Option<&Path>,
    active_file: Option<&Path>,
) -> Result<TargetDirectory, TargetError> {
    let dir = match (selected, active_file) {
        (Some(sel), _) => {
            let sel = absolute(sel)?;
            if sel.is_dir() {
                sel
            } else {
                parent_of(&sel)
            }
        }
        (None, Some(file)) => parent_of(&absolute(file)?),
        (None, None) => return Err(TargetError::NoContext),
    };

    if !dir.is_dir() {
        return Err(TargetError::NotADirectory(dir));
    }
    dir.to_str()
        .map(TargetDirectory::new)
        .ok_or(TargetError::NotUtf8(dir.clone()))
}

fn absolute(path: &Path) -> Result<PathBuf, TargetError> {
    std::path::absolute(path).map_err(|source| TargetError::Absolute {
        path: path.to_path_buf(),
        source,
    })
}

fn parent_of(file: &Path) -> PathBuf {
    file.parent()
        .map_or_else(|| file.to_path_buf(), Path::to_path_buf)
}

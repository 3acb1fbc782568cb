//! Options and destination selection for [`write_csv`](crate::write_csv).

use std::path::{Path, PathBuf};

/// CSV writing options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WriteOptions {
    /// Emit a header row of column names.
    pub col_names: bool,
    /// Append to an existing file destination instead of truncating it.
    /// Ignored for in-memory output.
    pub append: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            col_names: true,
            append: false,
        }
    }
}

/// Where encoded text goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Destination {
    /// Accumulate in memory and return the text.
    #[default]
    Memory,
    /// Stream to a file. An empty path means [`Destination::Memory`].
    Path(PathBuf),
}

impl Destination {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Destination::Path(path.into())
    }

    /// The file to write, or `None` for in-memory output.
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Destination::Memory => None,
            Destination::Path(path) if path.as_os_str().is_empty() => None,
            Destination::Path(path) => Some(path),
        }
    }
}

impl From<&str> for Destination {
    fn from(path: &str) -> Self {
        if path.is_empty() {
            Destination::Memory
        } else {
            Destination::path(path)
        }
    }
}

impl From<&Path> for Destination {
    fn from(path: &Path) -> Self {
        Destination::path(path)
    }
}

impl From<PathBuf> for Destination {
    fn from(path: PathBuf) -> Self {
        Destination::Path(path)
    }
}

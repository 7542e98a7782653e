mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{MockFileSystem, entry};

use std::io;
use std::path::Path;

use crate::models::FsEntry;

/// Lists the immediate entries of one directory.
pub trait FileSystem {
    /// Reports whether `path` exists and resolves to a directory.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;
}

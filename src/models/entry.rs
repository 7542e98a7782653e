use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    /// A symbolic link. Links resolving to a directory are listed as
    /// directories but never descended.
    Symlink {
        target_is_dir: bool,
    },
    Other,
}

impl EntryKind {
    pub fn is_listed_as_dir(self) -> bool {
        matches!(
            self,
            EntryKind::Directory
                | EntryKind::Symlink {
                    target_is_dir: true
                }
        )
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: OsString,
    pub kind: EntryKind,
}

use std::fs::FileType;
use std::io;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(std::fs::metadata(path)?.is_dir())
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let kind = classify(entry.file_type().ok(), &path);
            entries.push(FsEntry {
                name: entry.file_name(),
                path,
                kind,
            });
        }
        Ok(entries)
    }
}

/// Entries whose type cannot be read are listed as `Other`, which the
/// builder treats as a file.
fn classify(file_type: Option<FileType>, path: &Path) -> EntryKind {
    let Some(file_type) = file_type else {
        return EntryKind::Other;
    };

    if file_type.is_symlink() {
        // Broken links resolve to nothing and are listed as files.
        let target_is_dir = std::fs::metadata(path).is_ok_and(|meta| meta.is_dir());
        EntryKind::Symlink { target_is_dir }
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(io::ErrorKind, String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        self.inner
            .borrow_mut()
            .responses
            .insert(dir.into(), Response::Ok(entries));
    }

    /// Registers `names` under `dir`; a trailing `/` marks a directory.
    pub fn set_dir(&self, dir: &str, names: &[&str]) {
        let entries = names
            .iter()
            .map(|name| match name.strip_suffix('/') {
                Some(dir_name) => entry(dir, dir_name, EntryKind::Directory),
                None => entry(dir, name, EntryKind::File),
            })
            .collect();
        self.set_dir_entries(dir, entries);
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, kind: io::ErrorKind, message: &str) {
        self.inner
            .borrow_mut()
            .responses
            .insert(dir.into(), Response::Err(kind, message.to_owned()));
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.inner.borrow().calls.clone()
    }
}

pub fn entry(dir: &str, name: &str, kind: EntryKind) -> FsEntry {
    FsEntry {
        path: Path::new(dir).join(name),
        name: name.into(),
        kind,
    }
}

impl FileSystem for MockFileSystem {
    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        let inner = self.inner.borrow();
        if inner.responses.contains_key(path) {
            return Ok(true);
        }

        let listed = inner.responses.values().any(|response| match response {
            Response::Ok(entries) => entries.iter().any(|entry| entry.path == path),
            Response::Err(..) => false,
        });
        if listed {
            Ok(false)
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            ))
        }
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock response for {}", dir.display()),
            )),
        }
    }
}

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::{Result, TreeError};
use crate::fs::{FileSystem, RealFileSystem};
use crate::models::{EntryKind, TreeNode};
use crate::tree::filter::ExclusionRules;

/// What to do when a directory below the root cannot be listed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorPolicy {
    /// Fail the whole build with a traversal error.
    #[default]
    Abort,
    /// Keep the directory as an empty node and continue with its siblings.
    Skip,
}

/// Configuration options for building a tree.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub rules: ExclusionRules,
    pub on_error: ErrorPolicy,
}

/// Build the tree beneath `root` using the real filesystem and default options.
pub fn build_tree<D, S, P, T>(
    root: &Path,
    excluded_dirs: D,
    excluded_patterns: P,
) -> Result<TreeNode>
where
    D: IntoIterator<Item = S>,
    S: Into<OsString>,
    P: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let options = BuildOptions {
        rules: ExclusionRules::new(excluded_dirs, excluded_patterns)?,
        ..BuildOptions::default()
    };
    build(&RealFileSystem, root, &options)
}

/// Build the tree beneath `root`.
///
/// The root itself is never matched against the directory exclusions, and a
/// failure to list it is fatal regardless of `options.on_error`.
pub fn build<F: FileSystem>(fs: &F, root: &Path, options: &BuildOptions) -> Result<TreeNode> {
    match fs.is_dir(root) {
        Ok(true) => {}
        Ok(false) => return Err(TreeError::not_a_directory(root)),
        Err(err) => return Err(TreeError::inaccessible(root, err)),
    }

    build_dir(fs, root, options, 0).map(TreeNode::Directory)
}

fn build_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &BuildOptions,
    depth: usize,
) -> Result<HashMap<OsString, TreeNode>> {
    debug!(dir = %dir.display(), depth, "listing directory");

    let entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(source) if depth > 0 && options.on_error == ErrorPolicy::Skip => {
            warn!(dir = %dir.display(), error = %source, "skipping unreadable directory");
            return Ok(HashMap::new());
        }
        Err(source) => return Err(TreeError::traversal(dir, source)),
    };

    let (dirs, files): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|entry| entry.kind.is_listed_as_dir());

    let mut children = HashMap::with_capacity(dirs.len() + files.len());

    // Directories go in first so a file can never shadow one. Existing keys
    // are never replaced.
    for entry in dirs {
        if options.rules.excludes_dir(&entry.name) {
            trace!(path = %entry.path.display(), "pruned directory");
            continue;
        }

        // Linked directories are shown but not followed.
        let node = if entry.kind == EntryKind::Directory {
            TreeNode::Directory(build_dir(fs, &entry.path, options, depth + 1)?)
        } else {
            TreeNode::empty_dir()
        };
        children.entry(entry.name).or_insert(node);
    }

    for entry in files {
        if options.rules.excludes_file(&entry.name) {
            trace!(path = %entry.path.display(), "excluded file");
            continue;
        }
        children.entry(entry.name).or_insert(TreeNode::File);
    }

    Ok(children)
}

use std::collections::HashMap;
use std::ffi::OsString;

/// A node of the in-memory snapshot.
///
/// Names are kept as raw `OsString`s so entries that differ only in
/// non-UTF-8 bytes stay distinct. A node's path is implied by the chain of
/// names leading to it from the root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TreeNode {
    Directory(HashMap<OsString, TreeNode>),
    File,
}

impl TreeNode {
    pub fn empty_dir() -> Self {
        TreeNode::Directory(HashMap::new())
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }

    pub fn children(&self) -> Option<&HashMap<OsString, TreeNode>> {
        match self {
            TreeNode::Directory(children) => Some(children),
            TreeNode::File => None,
        }
    }

    /// Looks up a descendant by slash-separated relative path.
    #[cfg(test)]
    pub(crate) fn get(&self, rel_path: &str) -> Option<&TreeNode> {
        rel_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| {
                node.children()?.get(std::ffi::OsStr::new(segment))
            })
    }
}

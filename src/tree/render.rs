use std::io::{self, Write};

use crate::models::TreeNode;

/// Prefix introducing a directory line.
pub const BRANCH: &str = "+---";
/// Indentation carried beneath a directory.
pub const CONTINUATION: &str = "|   ";

/// Render the descendants of `root` as indented lines.
///
/// At every level directories come first, each followed by its subtree, then
/// files. Both groups are sorted by the raw bytes of their names; names are
/// converted to text lossily only here. The root produces no line.
pub fn render(root: &TreeNode) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(root, "", &mut lines);
    lines
}

fn render_into(node: &TreeNode, indent: &str, lines: &mut Vec<String>) {
    let Some(children) = node.children() else {
        return;
    };

    let (mut dirs, mut files): (Vec<_>, Vec<_>) =
        children.iter().partition(|(_, child)| child.is_dir());
    dirs.sort_unstable_by(|(a, _), (b, _)| a.as_encoded_bytes().cmp(b.as_encoded_bytes()));
    files.sort_unstable_by(|(a, _), (b, _)| a.as_encoded_bytes().cmp(b.as_encoded_bytes()));

    let nested = format!("{indent}{CONTINUATION}");
    for (name, child) in dirs {
        lines.push(format!("{indent}{BRANCH}{}", name.to_string_lossy()));
        render_into(child, &nested, lines);
    }

    for (name, _) in files {
        lines.push(format!("{indent}{}", name.to_string_lossy()));
    }
}

/// Write `lines` separated by newlines, without a trailing newline.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> io::Result<()> {
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(line.as_bytes())?;
    }
    Ok(())
}

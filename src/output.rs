use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use crate::tree::write_lines;

/// Write the rendered lines to `path`, replacing any existing file.
pub fn write_snapshot(path: &Path, lines: &[String]) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, lines)
        .and_then(|()| writer.flush())
        .with_context(|| format!("cannot write {}", path.display()))
}

pub fn summary(count: usize) -> String {
    format!("Total items after filtering: {count}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_joined_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tree.txt");
        let lines = vec!["+---src".to_owned(), "|   main.py".to_owned(), "readme.md".to_owned()];

        write_snapshot(&path, &lines).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "+---src\n|   main.py\nreadme.md"
        );
    }

    #[test]
    fn reports_unwritable_destination() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("tree.txt");

        let err = write_snapshot(&path, &[]).unwrap_err();
        assert!(err.to_string().starts_with("cannot create "));
    }

    #[test]
    fn summary_reports_count() {
        assert_eq!(summary(3), "Total items after filtering: 3");
    }
}

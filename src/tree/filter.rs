use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

use aho_corasick::AhoCorasick;

use crate::error::Result;

/// Pre-compiled exclusion rules applied while building a tree.
///
/// Directory names are matched exactly. Filename patterns are literal,
/// case-sensitive substrings, compiled into one Aho-Corasick automaton so
/// each filename is scanned once against its raw bytes.
#[derive(Clone, Debug, Default)]
pub struct ExclusionRules {
    excluded_dirs: HashSet<OsString>,
    excluded_patterns: Option<AhoCorasick>,
}

impl ExclusionRules {
    pub fn new<D, S, P, T>(excluded_dirs: D, excluded_patterns: P) -> Result<Self>
    where
        D: IntoIterator<Item = S>,
        S: Into<OsString>,
        P: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let patterns: Vec<String> = excluded_patterns
            .into_iter()
            .map(|pattern| pattern.as_ref().to_owned())
            .collect();

        let excluded_patterns = if patterns.is_empty() {
            None
        } else {
            Some(AhoCorasick::new(&patterns)?)
        };

        Ok(Self {
            excluded_dirs: excluded_dirs.into_iter().map(Into::into).collect(),
            excluded_patterns,
        })
    }

    #[inline]
    pub fn excludes_dir(&self, name: &OsStr) -> bool {
        self.excluded_dirs.contains(name)
    }

    #[inline]
    pub fn excludes_file(&self, name: &OsStr) -> bool {
        self.excluded_patterns
            .as_ref()
            .is_some_and(|patterns| patterns.is_match(name.as_encoded_bytes()))
    }
}

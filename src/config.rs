use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::Result;
use crate::tree::{BuildOptions, ErrorPolicy, ExclusionRules};

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".github",
    "node_modules",
    "node_modulesx",
    "out",
    ".git",
    ".next",
    "temp",
    "sync",
];

pub const DEFAULT_EXCLUDED_PATTERNS: &[&str] = &[
    "-",
    "_",
    "tree.py",
    "tree.ps1",
    "tree2.ps1",
    "tree3.ps1",
    ".txt",
];

pub const DEFAULT_OUTPUT: &str = "tree.txt";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Output {
    File(PathBuf),
    Stdout,
}

/// Everything one snapshot run needs.
#[derive(Clone, Debug)]
pub struct Config {
    pub root: PathBuf,
    pub excluded_dirs: BTreeSet<String>,
    pub excluded_patterns: BTreeSet<String>,
    pub on_error: ErrorPolicy,
    pub output: Output,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            excluded_dirs: to_set(DEFAULT_EXCLUDED_DIRS),
            excluded_patterns: to_set(DEFAULT_EXCLUDED_PATTERNS),
            on_error: ErrorPolicy::Abort,
            output: Output::File(PathBuf::from(DEFAULT_OUTPUT)),
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::default();

        if let Some(path) = &cli.path {
            config.root = path.clone();
        }
        if cli.no_default_excludes {
            config.excluded_dirs.clear();
            config.excluded_patterns.clear();
        }
        config.excluded_dirs.extend(cli.exclude_dirs.iter().cloned());
        config
            .excluded_patterns
            .extend(cli.exclude_patterns.iter().cloned());

        if cli.skip_unreadable {
            config.on_error = ErrorPolicy::Skip;
        }
        config.output = if cli.stdout {
            Output::Stdout
        } else {
            Output::File(cli.output.clone())
        };

        config
    }

    pub fn build_options(&self) -> Result<BuildOptions> {
        Ok(BuildOptions {
            rules: ExclusionRules::new(
                self.excluded_dirs.iter().cloned(),
                &self.excluded_patterns,
            )?,
            on_error: self.on_error,
        })
    }
}

fn to_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

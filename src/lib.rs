pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod models;
pub mod output;
pub mod tree;

pub use crate::config::Config;
pub use crate::error::{Result, TreeError};
pub use crate::models::TreeNode;
pub use crate::tree::{build, build_tree, render};

use crate::fs::RealFileSystem;

/// Build and render the tree described by `config`.
pub fn snapshot(config: &Config) -> Result<Vec<String>> {
    let options = config.build_options()?;
    let tree = build(&RealFileSystem, &config.root, &options)?;
    Ok(render(&tree))
}

pub mod build;
pub mod filter;
pub mod render;

pub use build::{BuildOptions, ErrorPolicy, build, build_tree};
pub use filter::ExclusionRules;
pub use render::{render, write_lines};

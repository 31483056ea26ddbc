pub mod builder;
pub mod cli;
pub mod color;
pub mod comment;
pub mod config;
pub mod detect;
pub mod error;
pub mod fence;
pub mod fs;
pub mod log;
pub mod output;
pub mod parser;
pub mod sanitize;
pub mod tree;

pub use builder::{BuildStats, Builder, select_root};
pub use cli::{BuildArgs, Cli, Command, OutputFormat, ScanArgs};
pub use detect::{TreeRegion, find_region};
pub use error::{Error, ExitCode, Result};
pub use fence::{Fence, scan_fences};
pub use fs::{FileSystem, RealFileSystem, WriteMode};
pub use log::BuildLog;
pub use tree::{Forest, Node, NodeId};

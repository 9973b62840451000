// src/cli/mod.rs
pub mod args;
pub mod paths;

pub use args::{Cli, DirectionArg};
pub use paths::{expand_paths, PathError};

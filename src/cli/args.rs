// src/cli/args.rs

use clap::{Parser, ValueEnum};

use crate::fmt::config::{GroupSeparator, SortConfig};
use crate::transform::SortDirection;

/// Span-length sorter for script source files
#[derive(Parser)]
#[command(name = "spansort")]
#[command(version = "0.1.0")]
#[command(about = "Sort imports, exports, and element attributes by span length", long_about = None)]
pub struct Cli {
    /// Paths to sort (files, directories, or glob patterns; "-" for stdin)
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<String>,

    /// Check only - don't modify files, exit 1 if any need sorting
    #[arg(long)]
    pub check: bool,

    /// Write to stdout instead of modifying files
    #[arg(long)]
    pub stdout: bool,

    /// Direction for named import specifiers
    #[arg(long, value_enum, default_value_t = DirectionArg::Asc)]
    pub import_order: DirectionArg,

    /// Direction for whole import declarations within a group
    #[arg(long, value_enum, default_value_t = DirectionArg::Asc)]
    pub declaration_order: DirectionArg,

    /// Separate import groups through a marker statement stripped after
    /// rendering, instead of the direct blank-line annotation
    #[arg(long, value_name = "PAYLOAD")]
    pub marker: Option<String>,
}

impl Cli {
    pub fn sort_config(&self) -> SortConfig {
        SortConfig {
            import_specifiers: self.import_order.into(),
            declarations: self.declaration_order.into(),
            group_separator: match &self.marker {
                Some(payload) => GroupSeparator::Marker(payload.clone()),
                None => GroupSeparator::BlankLine,
            },
        }
    }
}

/// Sort direction as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Shortest span first
    Asc,
    /// Longest span first
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Ascending,
            DirectionArg::Desc => SortDirection::Descending,
        }
    }
}

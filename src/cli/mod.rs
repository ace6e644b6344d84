mod route;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use route::request_lines;

#[derive(Parser)]
#[command(name = "cmdpat")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum Commands {
    /// Show the tokens, parameters and expression of a usage string
    Inspect(InspectArgs),
    /// Match one line against one usage string
    Match(MatchArgs),
    /// Route lines to the first matching command of a catalog
    Dispatch(DispatchArgs),
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct InspectArgs {
    /// Usage string, e.g. "remind <who> at <time:integer>"
    pub usage: String,
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct MatchArgs {
    /// Usage string to compile
    pub usage: String,

    /// Input line to test
    pub line: String,
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct DispatchArgs {
    /// Catalog file (skips global/local discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Line to dispatch (reads one line per request from stdin when omitted)
    pub line: Option<String>,
}

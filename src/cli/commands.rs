use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::IdStrategy;

#[derive(Parser)]
#[command(name = "tl", about = concat!("[x] tasklist v", env!("CARGO_PKG_VERSION"), " - a to-do list that lives as long as you do"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: the platform config dir, tasklist/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write log files into this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a script of commands to an empty list and print the outcome
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Script file, or - to read stdin
    #[arg(default_value = "-")]
    pub script: String,

    /// How new task ids are drawn (default: config, else sequential)
    #[arg(long, value_enum)]
    pub ids: Option<IdsArg>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdsArg {
    Clock,
    Sequential,
}

impl From<IdsArg> for IdStrategy {
    fn from(arg: IdsArg) -> Self {
        match arg {
            IdsArg::Clock => IdStrategy::Clock,
            IdsArg::Sequential => IdStrategy::Sequential,
        }
    }
}

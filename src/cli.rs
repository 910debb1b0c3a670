use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Webship - pack a static site and ship it to your web servers
#[derive(Parser, Debug)]
#[command(name = "webship")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./webship.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pack the content directory into versions/<name>_<timestamp>.tgz
    #[command(name = "do_pack", visible_alias = "pack")]
    DoPack,

    /// Push an existing archive to every configured host
    #[command(name = "do_deploy", visible_alias = "distribute")]
    DoDeploy {
        /// Path to a local archive produced by do_pack
        archive: PathBuf,
    },

    /// Pack, then push the new archive to every configured host
    Deploy,
}

//! Webship CLI - pack a static site and ship it to web servers
//!
//! Usage: webship [--json] [-v...] [--config FILE] <COMMAND>
//!
//! Commands:
//!   do_pack     Pack the content directory into a timestamped archive
//!   do_deploy   Push an existing archive to every configured host
//!   deploy      Pack, then push

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let loaded = webship::config::resolve(cli.config.as_deref(), &cwd)?;
    if let Some(source) = &loaded.source {
        commands::print_config_warnings(source, &loaded.warnings);
    }

    let ok = match &cli.command {
        Commands::DoPack => commands::pack::cmd_do_pack(&loaded.config, cli.json, cli.verbose)?,
        Commands::DoDeploy { archive } => {
            commands::deploy::cmd_do_deploy(archive, &loaded.config, cli.json, cli.verbose)?
        }
        Commands::Deploy => commands::deploy::cmd_deploy(&loaded.config, cli.json, cli.verbose)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Logs go to stderr so `--json` keeps stdout clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

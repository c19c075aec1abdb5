//! `zl-cleanup` binary entry point.
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use zl_cleanup::cli::{Cli, Command};
use zl_cleanup::commands;
use zl_cleanup::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let command = args.command.name();
    logging::init_subscriber(args.verbose, command);
    let log = Arc::new(Logger::new(command));

    match &args.command {
        Command::Clean(opts) => commands::clean::run(opts, &log),
        Command::Check(opts) => commands::check::run(opts, log.as_ref()),
        Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}

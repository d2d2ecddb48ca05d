// src/main.rs
use clap::Parser;

use retitle::cli::{Args, Commands};
use retitle::config::Config;
use retitle::inspect::handle_inspect;
use retitle::renamer::{RenameOptions, handle_rename};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;

    let args = Args::parse();

    match args.command {
        Commands::Rename {
            path,
            recursive,
            dry_run,
            log,
        } => {
            let opts = RenameOptions {
                recursive,
                dry_run,
                write_log: log,
            };
            handle_rename(&path, opts, &config)?;
        }
        Commands::Inspect { path, recursive } => {
            handle_inspect(&path, recursive, &config)?;
        }
    }

    Ok(())
}

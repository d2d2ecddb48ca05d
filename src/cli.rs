//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "retitle")]
#[command(about = "Rename MP3 files after the title in their ID3v1 tag")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rename media files after their ID3v1 title
    Rename {
        /// Media file or directory of media files
        path: PathBuf,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Report what would be renamed without touching any file
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Write a text log file of the run to the current directory
        #[arg(long)]
        log: bool,
    },
    /// List the ID3v1 titles without renaming anything
    Inspect {
        /// Media file or directory of media files
        path: PathBuf,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
}

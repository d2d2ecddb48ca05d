//! # retitle - ID3v1 title based MP3 renamer
//!
//! retitle reads the legacy ID3v1 tag stored in the last 128 bytes of an MP3
//! file and renames the file after the title found there. It works on a single
//! file or on every MP3 in a directory.
//!
//! ## Features
//!
//! - **Strict ID3v1 parsing**: fixed-offset read of the trailer block, `TAG`
//!   identifier check, ISO-8859-1 title decoding with space/NUL padding removal
//! - **Safe renames**: never overwrites an existing file and skips files that
//!   already carry the right name
//! - **Dry runs**: see every rename before it happens
//! - **Run logs**: optional text log of every per-file outcome
//!
//! ## Command Line Usage
//!
//! ```bash
//! # Rename every MP3 in a directory
//! retitle rename ~/Music/Unsorted
//!
//! # Preview without touching anything
//! retitle rename ~/Music/Unsorted --dry-run
//!
//! # Show the titles only
//! retitle inspect ~/Music/Unsorted/track01.mp3
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use retitle::id3v1::{read_title, TitleLookup};
//! use std::path::Path;
//!
//! fn main() -> Result<(), retitle::id3v1::ExtractError> {
//!     match read_title(Path::new("track01.mp3"))? {
//!         TitleLookup::Present(title) => println!("Title: {}", title),
//!         TitleLookup::Absent(reason) => println!("No tag: {}", reason),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! An optional TOML file at `~/.config/retitle/config.toml` can change the
//! handled extensions, enable recursion by default and pick a color theme.
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line argument parsing
//! - [`config`]: Configuration management
//! - [`id3v1`]: ID3v1 trailer tag extraction
//! - [`inspect`]: Read-only title listing
//! - [`log`]: Log file generation
//! - [`media`]: Media file recognition
//! - [`renamer`]: Rename decisions and batch processing
//! - [`sanitize`]: Title to filename conversion
//! - [`scanner`]: Candidate file discovery
//! - [`tui`]: Terminal output

pub mod cli;
pub mod config;
pub mod id3v1;
pub mod inspect;
pub mod log;
pub mod media;
pub mod renamer;
pub mod sanitize;
pub mod scanner;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use id3v1::{Absence, ExtractError, TitleLookup, extract_title, read_title};
pub use renamer::{RenameOutcome, RenameStats, rename_file};
pub use scanner::ScanStats;

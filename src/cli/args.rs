//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

/// Course plan scaffolder: print the course brief and generate per-day template files
///
/// Without flags, prints the course brief. Action flags combine and run in a
/// fixed order: print, readme, init, day.
#[derive(Parser, Debug)]
#[command(name = "dayplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the course brief and project list
    #[arg(long)]
    pub print: bool,

    /// Scaffold the days/ folder with day template files
    #[arg(long)]
    pub init: bool,

    /// Generate README.md in the working root
    #[arg(long)]
    pub readme: bool,

    /// Create a single day template (day number)
    #[arg(long, value_name = "N")]
    pub day: Option<u32>,

    /// Working root (default: cwd)
    #[arg(short = 'C', long, value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum, value_name = "SHELL")]
    pub generator: Option<Shell>,

    /// Print author and version info
    #[arg(long)]
    pub info: bool,
}

//! Command-line interface definition.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

/// Convert between JSCalendar JSON and iCalendar
#[derive(Debug, Parser)]
#[command(name = "calmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "CALMAP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Write documented defaults for unset JSCalendar properties
    #[arg(long, global = true)]
    pub include_defaults: bool,

    /// Write JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert JSCalendar JSON to iCalendar
    ToIcal {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Convert iCalendar to JSCalendar JSON
    ToJscal {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Print derived start, end and alert times of JSCalendar JSON input
    Estimate {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}

impl Command {
    #[must_use]
    pub fn input(&self) -> &Path {
        match self {
            Self::ToIcal { input } | Self::ToJscal { input } | Self::Estimate { input } => input,
        }
    }
}

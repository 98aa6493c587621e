use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sdconf", version, about = "systemd unit file configurator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (default: $HOME/.config/sdconf/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify filenames by their unit extension
    Detect {
        #[arg(required = true)]
        filenames: Vec<String>,
    },
    /// List known unit types
    Types,
    /// List template sections
    Sections,
    /// List the directives offered for a section
    Directives {
        section: String,
    },
    /// Show documentation for a directive
    Explain {
        directive: String,
    },
    /// Spot-check a directive value
    Validate {
        directive: String,
        value: String,
        #[arg(long, default_value_t = false, help = "Exit non-zero when invalid")]
        strict: bool,
    },
    /// Print a unit file with its detected type
    Preview {
        file: PathBuf,
    },
    /// Insert a directive template into a unit file and save it
    Insert {
        file: PathBuf,
        #[arg(long)]
        section: String,
        #[arg(long)]
        directive: String,
        #[arg(long, help = "Char offset to insert at (default: end of text)")]
        at: Option<usize>,
        #[arg(long, help = "Save under this name in the file's directory")]
        name: Option<String>,
        #[arg(long, default_value_t = false, help = "Allow sections/directives outside the catalog")]
        force: bool,
    },
    /// Create a boilerplate unit file for the type named by its extension
    New {
        name: String,
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Interactive editing session reading one command per line
    Session {
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

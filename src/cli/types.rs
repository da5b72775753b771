use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cqlhelp")]
#[command(about = "Look up CQL help topics", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Path to config file (default: <config dir>/cqlhelp/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all CQL help topics
    Topics {
        /// Print topics as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show the documentation anchor for a topic
    Show {
        /// Topic name, e.g. create_table or SELECT (case-insensitive)
        topic: String,

        /// Print the full documentation URL instead of the anchor
        #[arg(short, long)]
        url: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },

    /// Internal: Dynamic completion helper (invoked by shell)
    #[command(hide = true)]
    Complete {
        /// Shell type (bash, zsh, fish)
        shell: String,
        /// Command line up to the cursor, current word, previous word
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

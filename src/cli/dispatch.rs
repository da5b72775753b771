use anyhow::{Context, Result};
use cqlhelp::commands::{show, topics};
use cqlhelp::completions::{complete_dynamic, generate_completions, CompletionContext, Shell};
use cqlhelp::config::Config;
use std::io;
use std::str::FromStr;
use tracing::debug;

use super::types::{Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Topics { json } => topics::execute(json),
        Commands::Show { topic, url } => {
            let config = Config::load(cli.config.as_deref())?;
            show::execute(topic, url, &config)
        }
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate_completions(&mut cmd, shell, &mut io::stdout())
                .context("Failed to write completion script")
        }
        Commands::Complete { shell, args } => {
            let shell = Shell::from_str(&shell)?;
            let ctx = CompletionContext::from_args(&args);
            debug!(shell = shell.name(), cmdline = %ctx.cmdline, "dynamic completion");
            complete_dynamic(&ctx)
        }
    }
}

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::dispatch::dispatch;
use cli::types::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cqlhelp::logging::init(cli.verbose);
    dispatch(cli)
}

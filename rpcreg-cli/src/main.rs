use anyhow::Context;
use clap::Parser;
use cli::Cli;
use human_panic::setup_panic;

use crate::logging::init_logging;

mod cli;
mod generate;
mod logging;
mod opts;

fn main() -> anyhow::Result<()> {
    setup_panic!();

    let cli: Cli = Cli::parse();

    init_logging(cli.verbose.log_level_filter()).expect("Could not initialize logging");

    generate::generate(&cli.output, cli.num_methods, &cli.generator_params())
        .context("Failed to generate the RPC registration macros")?;

    Ok(())
}

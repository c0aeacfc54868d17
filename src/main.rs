use anyhow::Result;
use clap::Parser;
use tally::cli::{init_logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    cli.run()
}

use anyhow::Result;
use clap::Parser;

use folio_fx::cli::{self, Cli};
use folio_fx::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.debug);
    tracing::debug!(command = ?cli.command, "starting");
    cli::run(cli)
}

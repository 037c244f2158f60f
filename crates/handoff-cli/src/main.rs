//! handoff: Inject knowledge-driven documentation into source files

use clap::Parser;
use handoff_cli::{Cli, Commands, commands, setup_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::InjectDocs(args) => commands::inject::run(&args).await?,
        Commands::Knowledge(args) => commands::knowledge::run(&args).await?,
    }

    Ok(())
}

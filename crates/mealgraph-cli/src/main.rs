//! mealgraph CLI main entry point

use anyhow::Result;
use clap::Parser;
use mealgraph_cli::commands::{Cli, CommandExecutor};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // With no arguments, run the full generate pipeline with defaults.
    let cli = if std::env::args().len() == 1 {
        Cli::parse_from(["mealgraph", "generate"])
    } else {
        Cli::parse()
    };

    // Execute the command
    let executor = CommandExecutor::new();
    let result = executor.execute(cli.command).await?;

    // Exit with appropriate code
    if result.success {
        std::process::exit(0);
    } else {
        std::process::exit(1);
    }
}

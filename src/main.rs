//! prismaop - cloud account inventory reports for Prisma Cloud

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod events;
mod inventory;
mod output;

use cli::Cli;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "prismaop=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    cli::inventory::run(&cli).await
}

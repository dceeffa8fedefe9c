use anyhow::Result;
use clap::Parser;

use ocichat::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    ocichat::app::run(&cli).await
}

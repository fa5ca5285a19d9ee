use clap::Parser;
use microclimate::cli::{run, Cli};
use microclimate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}

mod command_line;
mod config;
mod dynamodb;
mod errors;
mod logging;
mod utils;


use anyhow::Result;
use clap::Parser;

use crate::command_line::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging()?;
    dotenv::dotenv().ok();

    command_line::run(&cli).await
}

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use gradebook_api::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    let settings = commands::load_settings(cli.config.as_deref(), cli.database_url.clone())?;

    // Initialize tracing
    telemetry::init_tracing("gradebook=info,gradebook_api=info", settings.log_json);

    commands::execute(cli.command, settings).await
}

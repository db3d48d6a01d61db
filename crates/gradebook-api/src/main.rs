use anyhow::Result;
use gradebook_api::{telemetry, Settings};

const DEFAULT_FILTER: &str =
    "gradebook_api=debug,gradebook_core=debug,gradebook_db=debug,tower_http=debug,axum::rejection=trace";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let settings = Settings::load(None)?;

    telemetry::init_tracing(DEFAULT_FILTER, settings.log_json);

    gradebook_api::serve(&settings).await
}

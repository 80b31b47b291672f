mod startup;
mod shutdown;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting attendees API");

    // Load configuration
    let config = startup::load_config()?;

    // Serve until interrupted
    startup::start_server(config).await
}

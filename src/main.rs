mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting barbershop dashboard");

    // Load configuration
    let config = startup::load_config()?;

    // Load the dashboard and export the configured view
    startup::run_dashboard(config).await
}

use affirmation_service::config::AffirmationConfig;
use affirmation_service::startup::Application;
use anyhow::Context;
use dotenvy::dotenv;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AffirmationConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "affirmation-service",
        "info",
        config.otlp_endpoint.as_deref(),
    );

    let app = Application::build(config)
        .await
        .context("Failed to build application")?;

    app.run_until_stopped()
        .await
        .context("Affirmation service stopped with an error")?;

    Ok(())
}

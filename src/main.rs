use anyhow::Context;
use roundtable::{app::App, config::get_configuration, telemetry::get_subscriber};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let app = App::with(config)
        .await
        .context("The listener should be able to bind the address.")?;

    tracing::info!(host = %app.host(), port = app.port(), "starting server");
    app.serve().await.context("The server should be running")?;

    Ok(())
}

use anyhow::Result;
use function_app::{configuration::get_configuration, startup::App, telemetry::init_telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry("info".into());

    let config = get_configuration().expect("Failed to read configuration");
    App::build(&config).await?.run().await
}

use seat_leads::configuration;
use seat_leads::error::BizErrorEnum;
use seat_leads::startup::Application;
use seat_leads::telemetry;

#[tokio::main]
async fn main() -> Result<(), BizErrorEnum> {
    let subscriber =
        telemetry::get_subscriber("seat-leads".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    let config = configuration::get_configuration()?;
    let application = Application::build(config)?;
    tracing::info!("Lead intake listening on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}

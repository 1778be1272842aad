use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use tripcal_app::cli::Cli;
use tripcal_app::export::{obtain_itinerary, write_calendar};
use tripcal_app::zone::{resolve_zone, start_of_day};
use tripcal_core::config::load_config;
use tripcal_core::constants::ICALENDAR_MEDIA_TYPE;
use tripcal_service::itinerary::{CalendarEmitter, CalendarOptions};
use tripcal_service::planner::ChatCompletionsClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let itinerary = obtain_itinerary(&cli, || {
        Ok(ChatCompletionsClient::from_config(&config.generator)?)
    })
    .await?;

    println!("{itinerary}");

    let zone = resolve_zone(config.calendar.timezone.as_deref())?;
    let start = cli
        .start_date
        .map(|date| start_of_day(date, zone))
        .transpose()?;
    let output = cli.output.unwrap_or(config.calendar.output);

    let emitter = CalendarEmitter::new().with_options(CalendarOptions {
        product_id: config.calendar.product_id,
    });
    let events = write_calendar(&itinerary, start.as_ref(), &emitter, &output)?;

    tracing::info!(
        events,
        path = %output.display(),
        media_type = ICALENDAR_MEDIA_TYPE,
        "Calendar written"
    );

    Ok(())
}

use seoulfest::api::{fetch_ranked, publish, EventDisplay};
use seoulfest::config::env_loader::load_config;
use seoulfest::events::model::Event;
use seoulfest::seoul_data::api::SeoulOpenDataAPI;
use seoulfest::tracing::setup_loki;
use tracing::{error, info, warn};

struct LogDisplay;

impl EventDisplay for LogDisplay {
    fn show_events(&self, events: &[Event]) {
        events.iter().enumerate().for_each(|(position, event)| {
            info!(
                "{}. {} @ {} ({}) [{}]",
                position + 1,
                event.title,
                event.place,
                event.district.as_deref().unwrap_or("-"),
                event.date_range_raw.as_deref().unwrap_or("-")
            )
        });
    }

    fn show_fetch_failed(&self) {
        error!("Failed to load events");
    }
}

#[tokio::main]
async fn main() {
    let loki = setup_loki().await;

    let config = load_config();
    info!("Loaded {:?}", config);

    let criteria = config.selection.to_criteria();
    let source = SeoulOpenDataAPI::for_criteria(&config.api_key, config.page_end_index, &criteria);

    let outcome = fetch_ranked(&source, &criteria, config.result_cap).await;

    publish(&outcome, &LogDisplay);

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        if let Err(err) = handle.await {
            warn!("Loki background task ended abnormally: {}", err);
        }
    }
}

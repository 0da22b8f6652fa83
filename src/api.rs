use crate::events::filter::filter;
use crate::events::model::{Event, RankedResult, SelectionCriteria};
use crate::events::ranker::rank;
use crate::events::source::EventSource;
use tracing::{error, info, instrument};

/// Result of one fetch-and-rank pass.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Ranked(RankedResult),
    /// The source failed. Nothing partial is kept.
    FetchFailed,
}

impl FetchOutcome {
    /// Empty on failure
    pub fn events(&self) -> &[Event] {
        match self {
            FetchOutcome::Ranked(result) => &**result,
            FetchOutcome::FetchFailed => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::FetchFailed)
    }
}

/// Whatever shows the ranked events (a list, map markers...).
pub trait EventDisplay {
    fn show_events(&self, events: &[Event]);

    fn show_fetch_failed(&self);
}

/**
Fetches once from `source`, then filters and ranks against `criteria`.

A source failure is logged and turned into [`FetchOutcome::FetchFailed`], it never
propagates further.
*/
#[instrument(
    skip(source),
    fields(
        districts = criteria.districts.len(),
        distance_mode = criteria.reference_location.is_some()
    )
)]
pub async fn fetch_ranked<S: EventSource>(
    source: &S,
    criteria: &SelectionCriteria,
    cap: usize,
) -> FetchOutcome {
    let events = match source.fetch_raw_events().await {
        Ok(events) => events,
        Err(err) => {
            error!("Failed to fetch events: {}", err);
            return FetchOutcome::FetchFailed;
        }
    };

    info!("Fetched {} raw events", events.len());

    let ranked = rank(filter(events, criteria), criteria, cap);

    info!("Ranked {} events", ranked.len());

    FetchOutcome::Ranked(ranked)
}

pub fn publish(outcome: &FetchOutcome, display: &impl EventDisplay) {
    match outcome {
        FetchOutcome::Ranked(result) => display.show_events(result),
        FetchOutcome::FetchFailed => {
            display.show_events(&[]);
            display.show_fetch_failed();
        }
    }
}

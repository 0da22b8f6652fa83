use crate::events::model::{Event, SelectionCriteria};
use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;
use tracing::debug;

/// How far ahead an event still counts as upcoming.
pub const UPCOMING_DAYS: u64 = 30;

/// Keeps the events that are both in one of the selected districts and fully inside the
/// criteria's window. Input order is preserved.
pub fn filter(events: Vec<Event>, criteria: &SelectionCriteria) -> Vec<Event> {
    let total = events.len();

    let kept: Vec<Event> = events
        .into_iter()
        .filter(|event| {
            is_in_districts(event, &criteria.districts)
                && is_in_window(event, criteria.window_start, criteria.window_end)
        })
        .collect();

    debug!("Kept {} of {} events", kept.len(), total);

    kept
}

/// Substring match on the event's district. No selection means every district.
pub fn is_in_districts(event: &Event, districts: &BTreeSet<String>) -> bool {
    if districts.is_empty() {
        return true;
    }

    event
        .district
        .as_deref()
        .is_some_and(|district| {
            districts
                .iter()
                .any(|selected| district.contains(selected.as_str()))
        })
}

/// Starts on or after `window_start` and ends on or before `window_end`.
/// Events whose dates don't parse are never in a window.
pub fn is_in_window(event: &Event, window_start: NaiveDate, window_end: NaiveDate) -> bool {
    match event.date_range() {
        Some(range) => range.is_within(window_start, window_end),
        None => {
            debug!(
                "Excluding event '{}' with unparseable dates {:?}",
                event.title, event.date_range_raw
            );
            false
        }
    }
}

/// Events starting between today and [`UPCOMING_DAYS`] days from now, both ends included.
pub fn count_upcoming(events: &[Event], today: NaiveDate) -> usize {
    let Some(horizon) = today.checked_add_days(Days::new(UPCOMING_DAYS)) else {
        return 0;
    };

    events
        .iter()
        .filter_map(Event::date_range)
        .filter(|range| range.start >= today && range.start <= horizon)
        .count()
}

use crate::events::date_range::DateRange;
use crate::events::distance::Coordinates;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::ops::Deref;

/// One cultural event as delivered by the event source.
///
/// Only `district`, `date_range_raw`, `latitude` and `longitude` are looked at by the
/// filter and the ranker, the rest is carried through for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub id: String,
    pub category: Option<String>,
    pub district: Option<String>,
    pub title: String,
    pub place: String,
    pub fee: String,
    pub image_url: String,
    /// `yyyy-MM-dd~yyyy-MM-dd`, as sent by the source
    pub date_range_raw: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl Event {
    pub fn date_range(&self) -> Option<DateRange> {
        self.date_range_raw.as_deref().and_then(DateRange::parse)
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::parse(self.latitude.as_deref()?, self.longitude.as_deref()?)
    }
}

/// What the user picked: districts, the event window and, for the map, where they are.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionCriteria {
    /// Empty means every district
    pub districts: BTreeSet<String>,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    /// Presence switches the ranking from start date to distance
    pub reference_location: Option<Coordinates>,
}

impl SelectionCriteria {
    pub fn new(window_start: NaiveDate, window_end: NaiveDate) -> Self {
        Self {
            districts: BTreeSet::new(),
            window_start,
            window_end,
            reference_location: None,
        }
    }

    pub fn with_districts<I, S>(mut self, districts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.districts = districts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reference_location(mut self, location: Coordinates) -> Self {
        self.reference_location = Some(location);
        self
    }
}

/// Ordered events, never longer than the cap it was ranked with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedResult(Vec<Event>);

impl RankedResult {
    pub(crate) fn from_sorted(mut events: Vec<Event>, cap: usize) -> Self {
        events.truncate(cap);
        Self(events)
    }
}

impl Deref for RankedResult {
    type Target = [Event];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

use super::dto::CulturalEventInfoResponse;
use crate::events::date_range::{DateRange, DATE_FORMAT};
use crate::events::model::{Event, SelectionCriteria};
use crate::events::source::{EventSource, FetchError};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use reqwest::Client;
use std::future::Future;
use tracing::{error, info};

const SEOUL_OPEN_API_URL: &str = "http://openapi.seoul.go.kr:8088";
const RESPONSE_TYPE: &str = "json";
const SERVICE: &str = "culturalEventInfo";
const START_INDEX: u32 = 1;
pub const MAX_END_INDEX: u32 = 500;

lazy_static! {
    static ref REST_CLIENT: Client = Client::new();
}

/// Client for the Seoul Open Data `culturalEventInfo` service.
///
/// Requests rows `1..=end_index`, optionally narrowed with the `DATE` query parameter
/// (a single day or a `start~end` range).
#[derive(Clone)]
pub struct SeoulOpenDataAPI {
    api_key: String,
    end_index: u32,
    date: Option<String>,
}

impl SeoulOpenDataAPI {
    /// `end_index` is clamped to `1..=500`
    pub fn new(api_key: impl Into<String>, end_index: u32) -> Self {
        Self {
            api_key: api_key.into(),
            end_index: end_index.clamp(START_INDEX, MAX_END_INDEX),
            date: None,
        }
    }

    pub fn for_criteria(
        api_key: impl Into<String>,
        end_index: u32,
        criteria: &SelectionCriteria,
    ) -> Self {
        Self::new(api_key, end_index).within(criteria.window_start, criteria.window_end)
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date.format(DATE_FORMAT).to_string());
        self
    }

    pub fn within(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date = Some(DateRange::new(start, end).to_string());
        self
    }

    pub fn end_index(&self) -> u32 {
        self.end_index
    }

    pub fn date_query(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn url(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}/",
            SEOUL_OPEN_API_URL, self.api_key, RESPONSE_TYPE, SERVICE, START_INDEX, self.end_index
        )
    }

    /// A single request, no retries.
    #[tracing::instrument(skip(self), fields(end_index = self.end_index, date = ?self.date))]
    pub async fn get_events(&self) -> Result<Vec<Event>, FetchError> {
        info!("Getting up to {} events", self.end_index);

        let mut request = REST_CLIENT.get(self.url());

        if let Some(date) = &self.date {
            request = request.query(&[("DATE", date)]);
        }

        let json_response = request.send().await?.error_for_status()?.text().await?;

        let parsed_response = serde_json::from_str::<CulturalEventInfoResponse>(&json_response)
            .inspect_err(|e| error!("Response parse failed: {:?}", e))?;

        let events = parsed_response.into_events()?;

        info!("Got {} events", events.len());

        Ok(events)
    }
}

impl EventSource for SeoulOpenDataAPI {
    fn fetch_raw_events(&self) -> impl Future<Output = Result<Vec<Event>, FetchError>> + Send {
        self.get_events()
    }
}

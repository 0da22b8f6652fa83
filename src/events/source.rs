use crate::events::model::Event;
use std::future::Future;
use thiserror::Error;

/// Where raw events come from. One call, one attempt.
pub trait EventSource {
    fn fetch_raw_events(&self) -> impl Future<Output = Result<Vec<Event>, FetchError>> + Send;
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Received invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Service answered {code}: {message}")]
    Service { code: String, message: String },
}

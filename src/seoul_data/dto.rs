use crate::events::model::Event;
use crate::events::source::FetchError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

pub const SUCCESS_CODE: &str = "INFO-000";
pub const NO_DATA_CODE: &str = "INFO-200";

/// The service answers either with the `culturalEventInfo` envelope or, on errors and
/// empty results, with a bare `RESULT`.
#[derive(Debug, Deserialize)]
pub struct CulturalEventInfoResponse {
    #[serde(rename = "culturalEventInfo")]
    pub info: Option<CulturalEventInfo>,
    #[serde(rename = "RESULT")]
    pub result: Option<ResponseResult>,
}

#[derive(Debug, Deserialize)]
pub struct CulturalEventInfo {
    pub list_total_count: Option<u32>,
    #[serde(rename = "RESULT")]
    pub result: ResponseResult,
    #[serde(default)]
    pub row: Vec<ResponseEvent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseResult {
    #[serde(rename = "CODE")]
    pub code: String,
    #[serde(rename = "MESSAGE", default)]
    pub message: String,
}

// Note: every field may be missing, empty or (coordinates) numeric
#[derive(Debug, Deserialize)]
pub struct ResponseEvent {
    #[serde(rename = "CODENAME", default, deserialize_with = "deserialize_optional_str")]
    pub codename: Option<String>,
    #[serde(rename = "GUNAME", default, deserialize_with = "deserialize_optional_str")]
    pub guname: Option<String>,
    #[serde(rename = "TITLE", default, deserialize_with = "deserialize_optional_str")]
    pub title: Option<String>,
    #[serde(rename = "DATE", default, deserialize_with = "deserialize_optional_str")]
    pub date: Option<String>,
    #[serde(rename = "PLACE", default, deserialize_with = "deserialize_optional_str")]
    pub place: Option<String>,
    #[serde(rename = "USE_FEE", default, deserialize_with = "deserialize_optional_str")]
    pub use_fee: Option<String>,
    #[serde(rename = "MAIN_IMG", default, deserialize_with = "deserialize_optional_str")]
    pub main_img: Option<String>,
    #[serde(rename = "LAT", default, deserialize_with = "deserialize_optional_str")]
    pub lat: Option<String>,
    #[serde(rename = "LOT", default, deserialize_with = "deserialize_optional_str")]
    pub lot: Option<String>,
}

impl CulturalEventInfoResponse {
    pub fn into_events(self) -> Result<Vec<Event>, FetchError> {
        let (result, rows) = match (self.info, self.result) {
            (Some(info), _) => (info.result, info.row),
            (None, Some(result)) => (result, Vec::new()),
            (None, None) => {
                return Err(FetchError::Service {
                    code: "".to_string(),
                    message: "Response has neither events nor a result".to_string(),
                })
            }
        };

        match result.code.as_str() {
            SUCCESS_CODE => Ok(rows.iter().map(ResponseEvent::to_model).collect()),
            NO_DATA_CODE => {
                warn!("No events found: {}", result.message);
                Ok(Vec::new())
            }
            _ => Err(FetchError::Service {
                code: result.code,
                message: result.message,
            }),
        }
    }
}

impl ResponseEvent {
    /// The service has no event identifier, so each row gets a fresh one.
    pub fn to_model(&self) -> Event {
        Event {
            id: Uuid::new_v4().to_string(),
            category: self.codename.clone(),
            district: self.guname.clone(),
            title: self.title.clone().unwrap_or_default(),
            place: self.place.clone().unwrap_or_default(),
            fee: self.use_fee.clone().unwrap_or_default(),
            image_url: self.main_img.clone().unwrap_or_default(),
            date_range_raw: self.date.clone(),
            latitude: self.lat.clone(),
            longitude: self.lot.clone(),
        }
    }
}

fn deserialize_optional_str<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

use crate::events::distance::Coordinates;
use crate::events::model::SelectionCriteria;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};

pub struct Config {
    pub api_key: String,
    pub page_end_index: u32,
    pub result_cap: usize,
    pub selection: SelectionConfig,
}

#[derive(Debug, Clone)]
pub struct SelectionConfig {
    pub districts: BTreeSet<String>,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub reference_location: Option<Coordinates>,
}

impl SelectionConfig {
    pub fn to_criteria(&self) -> SelectionCriteria {
        SelectionCriteria {
            districts: self.districts.clone(),
            window_start: self.window_start,
            window_end: self.window_end,
            reference_location: self.reference_location,
        }
    }
}

// The API key stays out of the logs
impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"***")
            .field("page_end_index", &self.page_end_index)
            .field("result_cap", &self.result_cap)
            .field("selection", &self.selection)
            .finish()
    }
}

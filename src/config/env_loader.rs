use crate::config::model::{Config, SelectionConfig};
use crate::events::date_range::parse_date;
use crate::events::distance::Coordinates;
use crate::events::filter::UPCOMING_DAYS;
use crate::events::DEFAULT_RESULT_CAP;
use crate::seoul_data::api::MAX_END_INDEX;
use crate::seoul_data::district::District;
use chrono::{Days, Local, NaiveDate};
use std::collections::BTreeSet;
use std::env;
use std::str::FromStr;
use tracing::warn;

pub fn load_config() -> Config {
    let api_key = load_required_config("SEOUL_API_KEY");

    let today = Local::now().date_naive();
    let window_start = load_date_config("WINDOW_START").unwrap_or(today);
    let window_end = load_date_config("WINDOW_END").unwrap_or_else(|| {
        window_start
            .checked_add_days(Days::new(UPCOMING_DAYS))
            .unwrap_or(NaiveDate::MAX)
    });

    let reference_location = match (
        load_f64_config("REFERENCE_LAT"),
        load_f64_config("REFERENCE_LNG"),
    ) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng).unwrap_or_else(|| {
            panic!("REFERENCE_LAT/REFERENCE_LNG ({}, {}) is not a valid location", lat, lng)
        })),
        (None, None) => None,
        _ => panic!("REFERENCE_LAT and REFERENCE_LNG must be set together"),
    };

    Config {
        api_key,
        page_end_index: load_u32_config("PAGE_END_INDEX").unwrap_or(MAX_END_INDEX),
        result_cap: load_u32_config("RESULT_CAP")
            .map(|cap| cap as usize)
            .unwrap_or(DEFAULT_RESULT_CAP),
        selection: SelectionConfig {
            districts: parse_districts(&env::var("SEOUL_DISTRICTS").unwrap_or_default()),
            window_start,
            window_end,
            reference_location,
        },
    }
}

/// Comma separated. Names that aren't Seoul districts are kept, they may still match.
pub fn parse_districts(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .inspect(|name| {
            if District::from_str(name).is_err() {
                warn!(
                    "'{}' is not a Seoul district. Known districts: {}",
                    name,
                    District::korean_names().join(", ")
                );
            }
        })
        .map(str::to_string)
        .collect()
}

fn load_required_config(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{} must be set.", name))
}

fn load_date_config(name: &str) -> Option<NaiveDate> {
    match env::var(name) {
        Ok(value) => Some(parse_date(&value).unwrap_or_else(|| {
            panic!("Invalid config '{}'. Expected a yyyy-MM-dd date.", name)
        })),
        Err(_) => None,
    }
}

fn load_u32_config(name: &str) -> Option<u32> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected a positive integer number.", name)
        })),
        Err(_) => None,
    }
}

fn load_f64_config(name: &str) -> Option<f64> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected a decimal number.", name)
        })),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_parse_comma_separated_districts() {
        let districts = parse_districts(" 강남구,마포구 ,,");

        assert_eq!(
            districts,
            BTreeSet::from(["강남구".to_string(), "마포구".to_string()])
        );
    }

    #[test_log::test]
    fn should_keep_unknown_districts() {
        assert!(parse_districts("강남").contains("강남"));
    }

    #[test_log::test]
    fn when_empty_should_select_no_district() {
        assert!(parse_districts("").is_empty());
    }
}

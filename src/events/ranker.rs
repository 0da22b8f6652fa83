use crate::events::distance::Coordinates;
use crate::events::model::{Event, RankedResult, SelectionCriteria};
use chrono::NaiveDate;
use itertools::Itertools;
use std::cmp::Ordering;
use tracing::debug;

/// Orders the events and keeps the first `cap`.
///
/// With a reference location, closest first, events without usable coordinates last.
/// Otherwise earliest start date first, events without a parseable date last.
/// Ties keep their input order in both modes.
pub fn rank(events: Vec<Event>, criteria: &SelectionCriteria, cap: usize) -> RankedResult {
    let sorted = match criteria.reference_location {
        Some(reference) => sort_by_distance(events, &reference),
        None => sort_by_start_date(events),
    };

    RankedResult::from_sorted(sorted, cap)
}

pub fn sort_by_start_date(events: Vec<Event>) -> Vec<Event> {
    events
        .into_iter()
        .map(|event| (event.date_range().map(|range| range.start), event))
        .sorted_by(|(a, _), (b, _)| compare_start_dates(a, b))
        .map(|(_, event)| event)
        .collect()
}

/// Distances in meters from `reference`
pub fn sort_by_distance(events: Vec<Event>, reference: &Coordinates) -> Vec<Event> {
    events
        .into_iter()
        .map(|event| {
            let distance = event
                .coordinates()
                .map(|location| reference.distance_to(&location));

            if distance.is_none() {
                debug!("Event '{}' has no usable location, ranking it last", event.title);
            }

            (distance, event)
        })
        .sorted_by(|(a, _), (b, _)| compare_distances(a, b))
        .map(|(_, event)| event)
        .collect()
}

fn compare_start_dates(a: &Option<NaiveDate>, b: &Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_distances(a: &Option<f64>, b: &Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DEFAULT_RESULT_CAP;

    fn criteria() -> SelectionCriteria {
        SelectionCriteria::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        )
    }

    fn dated(id: &str, dates: Option<&str>) -> Event {
        Event {
            id: id.to_string(),
            date_range_raw: dates.map(str::to_string),
            ..Default::default()
        }
    }

    fn located(id: &str, latitude: &str, longitude: &str) -> Event {
        Event {
            id: id.to_string(),
            latitude: Some(latitude.to_string()),
            longitude: Some(longitude.to_string()),
            ..Default::default()
        }
    }

    fn ids(result: &RankedResult) -> Vec<&str> {
        result.iter().map(|e| e.id.as_str()).collect()
    }

    #[test_log::test]
    fn should_sort_by_ascending_start_date() {
        let events = vec![
            dated("a", Some("2025-01-10~2025-01-12")),
            dated("b", Some("2025-01-05~2025-01-06")),
            dated("c", Some("2025-02-01~2025-02-02")),
        ];

        let result = rank(events, &criteria(), DEFAULT_RESULT_CAP);

        assert_eq!(ids(&result), vec!["b", "a", "c"]);
    }

    #[test_log::test]
    fn should_keep_input_order_on_equal_start_dates() {
        let events = vec![
            dated("first", Some("2025-01-05~2025-01-20")),
            dated("second", Some("2025-01-05~2025-01-06")),
            dated("earlier", Some("2025-01-01~2025-01-02")),
            dated("third", Some("2025-01-05~2025-01-05")),
        ];

        let result = rank(events, &criteria(), DEFAULT_RESULT_CAP);

        assert_eq!(ids(&result), vec!["earlier", "first", "second", "third"]);
    }

    #[test_log::test]
    fn should_put_unparseable_dates_last_in_input_order() {
        let events = vec![
            dated("malformed", Some("2025-13-50~2025-14-60")),
            dated("late", Some("2025-06-01~2025-06-02")),
            dated("missing", None),
            dated("early", Some("2025-01-01~2025-01-02")),
        ];

        let result = rank(events, &criteria(), DEFAULT_RESULT_CAP);

        assert_eq!(ids(&result), vec!["early", "late", "malformed", "missing"]);
    }

    #[test_log::test]
    fn should_sort_by_distance_when_reference_is_given() {
        let events = vec![
            located("far", "37.6", "127.0"),
            located("nowhere", "", ""),
            located("here", "37.5665", "126.9780"),
            located("garbage", "north", "east"),
        ];
        let criteria =
            criteria().with_reference_location(Coordinates::new(37.5665, 126.9780).unwrap());

        let result = rank(events, &criteria, DEFAULT_RESULT_CAP);

        assert_eq!(ids(&result), vec!["here", "far", "nowhere", "garbage"]);
    }

    #[test_log::test]
    fn should_truncate_after_sorting() {
        let events = (1..=12)
            .rev()
            .map(|day| {
                dated(
                    &day.to_string(),
                    Some(&format!("2025-01-{:02}~2025-01-{:02}", day, day)),
                )
            })
            .collect();

        let result = rank(events, &criteria(), DEFAULT_RESULT_CAP);

        assert_eq!(result.len(), DEFAULT_RESULT_CAP);
        assert_eq!(result.first().unwrap().id, "1");
        assert_eq!(result.last().unwrap().id, "10");
    }
}

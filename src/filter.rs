use crate::errors::AppError;
use crate::models::{FilterRange, RangeQuery, Reading};
use chrono::{Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingFilter {
    LastThreeDays,
    LastWeek,
    LastMonth,
    Custom { start: NaiveDate, end: NaiveDate },
}

impl ReadingFilter {
    pub fn from_query(query: &RangeQuery) -> Result<Self, AppError> {
        match query.filter {
            FilterRange::ThreeDays => Ok(Self::LastThreeDays),
            FilterRange::OneWeek => Ok(Self::LastWeek),
            FilterRange::OneMonth => Ok(Self::LastMonth),
            FilterRange::Custom => {
                let start = parse_query_date(query.start.as_deref())?;
                let end = parse_query_date(query.end.as_deref())?;
                Ok(Self::Custom { start, end })
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::LastThreeDays => "Last 3 Days".to_string(),
            Self::LastWeek => "Last Week".to_string(),
            Self::LastMonth => "Last Month".to_string(),
            Self::Custom { start, end } => format!("{start} to {end}"),
        }
    }

    fn days_back(&self) -> Option<i64> {
        match self {
            Self::LastThreeDays => Some(3),
            Self::LastWeek => Some(7),
            Self::LastMonth => Some(30),
            Self::Custom { .. } => None,
        }
    }
}

fn parse_query_date(value: Option<&str>) -> Result<NaiveDate, AppError> {
    value
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .ok_or_else(|| {
            AppError::bad_request("custom range requires start and end dates (YYYY-MM-DD)")
        })
}

pub fn timestamp_ms(date: &str, time: &str) -> Option<i64> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    match date.and_time(time).and_local_timezone(Local) {
        LocalResult::Single(instant) => Some(instant.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp_millis()),
        // The wall-clock instant does not exist (DST gap).
        LocalResult::None => None,
    }
}

fn local_ms(naive: NaiveDateTime) -> i64 {
    match naive.and_local_timezone(Local) {
        LocalResult::Single(instant) => instant.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        // DST gap: fall back to the UTC reading for window bounds.
        LocalResult::None => naive.and_utc().timestamp_millis(),
    }
}

fn start_of_day_ms(date: NaiveDate) -> i64 {
    local_ms(date.and_time(NaiveTime::MIN))
}

fn end_of_day_ms(date: NaiveDate) -> i64 {
    // Last millisecond before the next local midnight.
    local_ms((date + Duration::days(1)).and_time(NaiveTime::MIN)) - 1
}

fn window_bounds(filter: &ReadingFilter, today: NaiveDate) -> (i64, i64) {
    match filter {
        ReadingFilter::Custom { start, end } => (start_of_day_ms(*start), end_of_day_ms(*end)),
        relative => {
            let end = end_of_day_ms(today);
            let days = relative.days_back().unwrap_or(0);
            (end - days * DAY_MS, end)
        }
    }
}

pub fn filter_readings(readings: &[Reading], filter: &ReadingFilter) -> Vec<Reading> {
    filter_readings_at(readings, filter, Local::now().date_naive())
}

pub fn filter_readings_at(
    readings: &[Reading],
    filter: &ReadingFilter,
    today: NaiveDate,
) -> Vec<Reading> {
    let (start, end) = window_bounds(filter, today);
    let mut selected: Vec<Reading> = readings
        .iter()
        .filter(|reading| reading.timestamp >= start && reading.timestamp <= end)
        .cloned()
        .collect();
    // Stable sort: equal timestamps keep list order (newest added first).
    selected.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReadingType;

    fn reading(id: &str, date: NaiveDate, time: &str) -> Reading {
        let date = date.to_string();
        Reading {
            id: id.to_string(),
            timestamp: timestamp_ms(&date, time).expect("valid datetime"),
            date,
            time: time.to_string(),
            value: 100,
            reading_type: ReadingType::Fasting,
        }
    }

    fn day(year: i32, month: u32, dayno: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dayno).unwrap()
    }

    #[test]
    fn three_day_window_keeps_recent_and_drops_old() {
        let today = day(2024, 5, 20);
        // Noon anchors keep the assertions valid across DST offsets.
        let readings = vec![
            reading("two-days-ago", today - Duration::days(2), "12:00"),
            reading("four-days-ago", today - Duration::days(4), "12:00"),
        ];

        let kept = filter_readings_at(&readings, &ReadingFilter::LastThreeDays, today);
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["two-days-ago"]);
    }

    #[test]
    fn relative_window_excludes_future_readings() {
        let today = day(2024, 5, 20);
        let readings = vec![
            reading("today", today, "12:00"),
            reading("tomorrow", today + Duration::days(1), "12:00"),
        ];

        let kept = filter_readings_at(&readings, &ReadingFilter::LastWeek, today);
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["today"]);
    }

    #[test]
    fn custom_range_is_inclusive_on_both_ends() {
        let filter = ReadingFilter::Custom {
            start: day(2024, 1, 1),
            end: day(2024, 1, 3),
        };
        let readings = vec![
            reading("first-minute", day(2024, 1, 1), "00:00"),
            reading("last-minute", day(2024, 1, 3), "23:59"),
            reading("just-after", day(2024, 1, 4), "00:01"),
        ];

        let kept = filter_readings_at(&readings, &filter, day(2024, 1, 10));
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["last-minute", "first-minute"]);
    }

    #[test]
    fn custom_range_with_start_after_end_is_empty() {
        let filter = ReadingFilter::Custom {
            start: day(2024, 1, 10),
            end: day(2024, 1, 1),
        };
        let readings = vec![reading("inside-neither", day(2024, 1, 5), "12:00")];
        assert!(filter_readings_at(&readings, &filter, day(2024, 1, 20)).is_empty());
    }

    #[test]
    fn results_sort_descending_with_stable_ties() {
        let today = day(2024, 5, 20);
        let mut tied_a = reading("tied-a", today, "09:00");
        let tied_b = reading("tied-b", today, "09:00");
        tied_a.timestamp = tied_b.timestamp;
        let readings = vec![
            tied_a,
            tied_b,
            reading("evening", today, "21:00"),
            reading("morning", today, "06:00"),
        ];

        let kept = filter_readings_at(&readings, &ReadingFilter::LastThreeDays, today);
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["evening", "tied-a", "tied-b", "morning"]);
    }

    #[test]
    fn query_resolution_validates_custom_dates() {
        let query = RangeQuery {
            filter: FilterRange::Custom,
            start: Some("2024-01-01".to_string()),
            end: Some("not-a-date".to_string()),
        };
        assert!(ReadingFilter::from_query(&query).is_err());

        let query = RangeQuery {
            filter: FilterRange::Custom,
            start: None,
            end: Some("2024-01-03".to_string()),
        };
        assert!(ReadingFilter::from_query(&query).is_err());

        let query = RangeQuery {
            filter: FilterRange::ThreeDays,
            start: None,
            end: None,
        };
        assert_eq!(
            ReadingFilter::from_query(&query).unwrap(),
            ReadingFilter::LastThreeDays
        );
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(ReadingFilter::LastThreeDays.label(), "Last 3 Days");
        assert_eq!(ReadingFilter::LastWeek.label(), "Last Week");
        assert_eq!(ReadingFilter::LastMonth.label(), "Last Month");
        let custom = ReadingFilter::Custom {
            start: day(2024, 1, 1),
            end: day(2024, 1, 3),
        };
        assert_eq!(custom.label(), "2024-01-01 to 2024-01-03");
    }

    #[test]
    fn timestamp_rejects_malformed_input() {
        assert!(timestamp_ms("2024-13-01", "08:00").is_none());
        assert!(timestamp_ms("2024-01-05", "25:00").is_none());
        assert!(timestamp_ms("yesterday", "08:00").is_none());
        assert!(timestamp_ms("2024-01-05", "08:15").is_some());
    }
}

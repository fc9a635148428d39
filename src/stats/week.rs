// Week bucketing
use chrono::{DateTime, Datelike, TimeZone};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use super::DAY_MS;
use crate::conversation::TimestampMs;

/// Bucket identity: two timestamps share a bucket iff year and week match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekBucketKey {
    pub year: i32,
    pub week: u32,
}

/// Simplified week-of-year numbering kept for compatibility with earlier reports.
///
/// `week = ceil((days_since_jan1 + weekday_of_jan1 + 1) / 7)` where
/// `days_since_jan1` is fractional and `weekday_of_jan1` counts from Sunday = 0.
/// This is not ISO-8601: the fractional day pushes the afternoon of the
/// last day of a week into the next one, and late December can reach week 53
/// or 54.
#[derive(Debug, Clone)]
pub struct LegacyWeekNumbering<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> LegacyWeekNumbering<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn key(&self, timestamp: TimestampMs) -> Option<WeekBucketKey> {
        let instant = timestamp.to_datetime()?.with_timezone(&self.tz);
        let year = instant.year();
        let jan1 = self.start_of_year(year)?;

        let past_days =
            (instant.timestamp_millis() - jan1.timestamp_millis()) as f64 / DAY_MS;
        let jan1_weekday = f64::from(jan1.weekday().num_days_from_sunday());
        let week = ((past_days + jan1_weekday + 1.0) / 7.0).ceil() as u32;

        Some(WeekBucketKey { year, week })
    }

    // Local midnight on January 1; zones that skip midnight start an hour later
    fn start_of_year(&self, year: i32) -> Option<DateTime<Tz>> {
        self.tz
            .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .earliest()
            .or_else(|| self.tz.with_ymd_and_hms(year, 1, 1, 1, 0, 0).earliest())
    }
}

/// Message counts keyed by week, in the order each week is first seen
pub fn weekly_buckets<Tz: TimeZone>(
    messages: &[TimestampMs],
    numbering: &LegacyWeekNumbering<Tz>,
) -> IndexMap<WeekBucketKey, usize> {
    let mut buckets = IndexMap::new();
    for &message in messages {
        match numbering.key(message) {
            Some(key) => *buckets.entry(key).or_insert(0) += 1,
            None => warn!(timestamp = message.as_millis(), "Timestamp outside calendar range"),
        }
    }
    buckets
}

/// Per-week message counts; weeks without messages are not represented
pub fn message_count_by_weeks<Tz: TimeZone>(
    messages: &[TimestampMs],
    numbering: &LegacyWeekNumbering<Tz>,
) -> Vec<usize> {
    weekly_buckets(messages, numbering).into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> TimestampMs {
        let dt = Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap();
        TimestampMs(dt.timestamp_millis() as f64)
    }

    fn week_of(ts: TimestampMs) -> WeekBucketKey {
        LegacyWeekNumbering::new(Utc).key(ts).unwrap()
    }

    #[test]
    fn test_year_starting_on_sunday() {
        // 2023-01-01 is a Sunday
        assert_eq!(week_of(at(2023, 1, 1, 0, 0, 0)).week, 1);
        assert_eq!(week_of(at(2023, 1, 7, 0, 0, 0)).week, 1);
        assert_eq!(week_of(at(2023, 1, 8, 0, 0, 0)).week, 2);
        assert_eq!(week_of(at(2023, 1, 8, 9, 30, 0)).week, 2);
    }

    #[test]
    fn test_fractional_day_moves_saturday_afternoon_forward() {
        // Saturday noon lands in the following week, unlike ISO-8601
        assert_eq!(week_of(at(2023, 1, 7, 12, 0, 0)).week, 2);
        assert_eq!(week_of(at(2023, 1, 7, 12, 0, 0)).year, 2023);
    }

    #[test]
    fn test_year_starting_on_monday() {
        // 2024-01-01 is a Monday
        assert_eq!(week_of(at(2024, 1, 1, 0, 0, 0)).week, 1);
        assert_eq!(week_of(at(2024, 1, 6, 0, 0, 0)).week, 1);
        assert_eq!(week_of(at(2024, 1, 6, 0, 0, 1)).week, 2);
        assert_eq!(week_of(at(2024, 1, 7, 12, 0, 0)).week, 2);
    }

    #[test]
    fn test_late_december_weeks() {
        // 2023-12-31 is a Sunday
        assert_eq!(
            week_of(at(2023, 12, 31, 12, 0, 0)),
            WeekBucketKey { year: 2023, week: 53 }
        );
        // 2000 is a leap year starting on a Saturday
        assert_eq!(
            week_of(at(2000, 12, 31, 12, 0, 0)),
            WeekBucketKey { year: 2000, week: 54 }
        );
    }

    #[test]
    fn test_same_week_number_in_different_years() {
        let a = week_of(at(2023, 1, 3, 0, 0, 0));
        let b = week_of(at(2024, 1, 3, 0, 0, 0));
        assert_eq!(a.week, b.week);
        assert_ne!(a, b);
    }

    #[test]
    fn test_counts_follow_first_encounter_order() {
        let messages = vec![
            at(2024, 1, 2, 10, 0, 0),
            at(2023, 11, 14, 10, 0, 0),
            at(2024, 1, 3, 10, 0, 0),
            at(2023, 11, 15, 10, 0, 0),
            at(2023, 11, 15, 11, 0, 0),
            at(2023, 6, 1, 0, 0, 0),
        ];

        let numbering = LegacyWeekNumbering::new(Utc);
        let counts = message_count_by_weeks(&messages, &numbering);
        assert_eq!(counts, vec![2, 3, 1]);
        assert_eq!(counts.iter().sum::<usize>(), messages.len());

        let keys: Vec<_> = weekly_buckets(&messages, &numbering)
            .keys()
            .map(|k| k.year)
            .collect();
        assert_eq!(keys, vec![2024, 2023, 2023]);
    }

    #[test]
    fn test_fixed_offset_uses_local_calendar() {
        let tokyo = LegacyWeekNumbering::new(FixedOffset::east_opt(9 * 3600).unwrap());
        // 2024-01-01 00:30 in Tokyo is still 2023-12-31 in UTC
        let new_year = at(2023, 12, 31, 15, 30, 0);
        assert_eq!(tokyo.key(new_year), Some(WeekBucketKey { year: 2024, week: 1 }));
        assert_eq!(week_of(new_year), WeekBucketKey { year: 2023, week: 53 });

        // Week 2 begins just after Jan 6 00:00 in Tokyo, 15:00 UTC on Jan 5
        assert_eq!(tokyo.key(at(2024, 1, 5, 15, 0, 0)).unwrap().week, 1);
        assert_eq!(tokyo.key(at(2024, 1, 5, 15, 0, 1)).unwrap().week, 2);
        assert_eq!(week_of(at(2024, 1, 5, 15, 0, 1)).week, 1);

        let new_york = LegacyWeekNumbering::new(FixedOffset::west_opt(5 * 3600).unwrap());
        // 2022-12-31 22:00 locally; 2022 starts on a Saturday
        assert_eq!(
            new_york.key(at(2023, 1, 1, 3, 0, 0)),
            Some(WeekBucketKey { year: 2022, week: 54 })
        );
    }

    #[test]
    fn test_empty_input() {
        let numbering = LegacyWeekNumbering::new(Utc);
        assert!(message_count_by_weeks(&[], &numbering).is_empty());
    }
}

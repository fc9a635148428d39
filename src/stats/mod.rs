// Message volume and cadence statistics

pub mod summary;
pub mod week;

use chrono::{DateTime, Utc};

use crate::conversation::{Conversation, TimestampMs};
use crate::error::{ExplorerError, Result};

pub use summary::{ExplorerSummary, WindowAverage};
pub use week::{message_count_by_weeks, weekly_buckets, LegacyWeekNumbering, WeekBucketKey};

pub const DAY_MS: f64 = 86_400_000.0;

/// Timestamps of every message written by the user.
///
/// Conversations are walked in order and each mapping in insertion order.
/// Messages from other roles or without a creation time are skipped.
pub fn extract_user_message_timestamps(conversations: &[Conversation]) -> Vec<TimestampMs> {
    conversations
        .iter()
        .flat_map(|conversation| conversation.mapping.values())
        .filter_map(|node| node.message.as_ref())
        .filter_map(|message| message.user_timestamp())
        .collect()
}

/// Earliest conversation by `create_time`; the first one wins a tie
pub fn first_conversation(conversations: &[Conversation]) -> Result<&Conversation> {
    conversations
        .iter()
        .min_by(|a, b| a.create_time.total_cmp(&b.create_time))
        .ok_or(ExplorerError::EmptyInput)
}

/// Messages per day over the trailing `day_count` days, rounded up.
///
/// A message counts when `now - timestamp < day_count` days, so one sitting
/// exactly on the window boundary is left out.
pub fn average_message_count_days(
    messages: &[TimestampMs],
    day_count: i64,
    now: DateTime<Utc>,
) -> Result<usize> {
    if day_count <= 0 {
        return Err(ExplorerError::InvalidArgument(format!(
            "day count must be positive, got {}",
            day_count
        )));
    }

    let now_ms = now.timestamp_millis() as f64;
    let window_ms = day_count as f64 * DAY_MS;
    let in_window = messages
        .iter()
        .filter(|ts| now_ms - ts.as_millis() < window_ms)
        .count();

    Ok(in_window.div_ceil(day_count as usize))
}

/// Whole days from `since` to `now`, rounded up
pub fn days_since(since: TimestampMs, now: DateTime<Utc>) -> i64 {
    let elapsed_ms = now.timestamp_millis() as f64 - since.as_millis();
    (elapsed_ms / DAY_MS).ceil() as i64
}

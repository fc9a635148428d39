// Report summary
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    average_message_count_days, days_since, extract_user_message_timestamps, first_conversation,
    message_count_by_weeks, LegacyWeekNumbering,
};
use crate::conversation::ExportPackage;
use crate::error::{ExplorerError, Result};

/// Average messages per day over a trailing window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowAverage {
    pub days: i64,
    pub messages_per_day: usize,
}

/// Everything the report prints, computed against one reference instant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerSummary {
    pub masked_email: String,
    pub first_contact: DateTime<Utc>,
    pub days_elapsed: i64,
    pub total_conversations: usize,
    pub total_messages: usize,
    /// Average since the first conversation
    pub average_since_first: WindowAverage,
    pub window_averages: Vec<WindowAverage>,
    pub weekly_message_counts: Vec<usize>,
}

impl ExplorerSummary {
    pub fn build<Tz: TimeZone>(
        package: &ExportPackage,
        window_days: &[i64],
        now: DateTime<Utc>,
        numbering: &LegacyWeekNumbering<Tz>,
    ) -> Result<Self> {
        let first = first_conversation(&package.conversations)?;
        let first_contact = first.created_at().to_datetime().ok_or_else(|| {
            ExplorerError::InvalidArgument(format!(
                "conversation create_time {} is out of range",
                first.create_time
            ))
        })?;
        let days_elapsed = days_since(first.created_at(), now);

        let messages = extract_user_message_timestamps(&package.conversations);
        debug!(
            messages = messages.len(),
            days_elapsed, "Extracted user messages"
        );

        // A first conversation less than a day old still gets a one-day window
        let since_first_days = days_elapsed.max(1);
        let average_since_first = WindowAverage {
            days: since_first_days,
            messages_per_day: average_message_count_days(&messages, since_first_days, now)?,
        };

        let window_averages = window_days
            .iter()
            .map(|&days| {
                Ok(WindowAverage {
                    days,
                    messages_per_day: average_message_count_days(&messages, days, now)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            masked_email: package.user.masked_email(),
            first_contact,
            days_elapsed,
            total_conversations: package.conversations.len(),
            total_messages: messages.len(),
            average_since_first,
            window_averages,
            weekly_message_counts: message_count_by_weeks(&messages, numbering),
        })
    }
}

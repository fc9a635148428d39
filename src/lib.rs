// gpt-explorer library entry point

pub mod chart;
pub mod config;
pub mod conversation;
pub mod error;
pub mod error_helper;
pub mod reporter;
pub mod stats;

// Re-exports
pub use config::{ChartConfig, ExplorerConfig};
pub use conversation::{mask_email, Conversation, ExportPackage, TimestampMs, UserRecord};
pub use error::ExplorerError;
pub use stats::{
    average_message_count_days, extract_user_message_timestamps, first_conversation,
    message_count_by_weeks, ExplorerSummary, LegacyWeekNumbering,
};

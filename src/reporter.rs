use chrono::{DateTime, TimeZone, Utc};
use colored::*;
use std::fmt::Display;
use std::path::Path;

use crate::chart::LineChart;
use crate::config::ChartConfig;
use crate::stats::{ExplorerSummary, WindowAverage};

pub fn print_report<Tz: TimeZone>(summary: &ExplorerSummary, chart: &ChartConfig, tz: &Tz)
where
    Tz::Offset: Display,
{
    println!("{}", "🧠 ChatGPT Data Package Explorer 🧠".yellow());
    println!();
    print_statistic("Statistics for", &summary.masked_email, Color::Blue);
    println!();

    print_statistic(
        "You met ChatGPT on",
        first_contact_text(summary, tz),
        Color::Green,
    );
    print_statistic(
        "Total conversations",
        format_number(summary.total_conversations as i64),
        Color::Cyan,
    );
    print_statistic(
        "Total messages",
        format_number(summary.total_messages as i64),
        Color::Cyan,
    );
    println!();

    print_statistic(
        "Average message count per days (beginning)",
        format_number(summary.average_since_first.messages_per_day as i64),
        Color::Cyan,
    );
    for average in &summary.window_averages {
        print_statistic(
            &format!("Average message count per days ({})", window_label(average)),
            format_number(average.messages_per_day as i64),
            Color::Cyan,
        );
    }
    println!();

    let chart = LineChart::new("Message count by weeks", chart).with_labels("weeks", "messages");
    println!("{}", chart.render(&summary.weekly_message_counts));
}

fn print_statistic(title: &str, value: impl Display, color: Color) {
    println!("{}: {}", title.color(color), value);
}

/// Date of the first conversation; the day count is printed without grouping
fn first_contact_text<Tz: TimeZone>(summary: &ExplorerSummary, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    format!(
        "{} ({} days ago)",
        format_date(summary.first_contact, tz),
        summary.days_elapsed
    )
}

fn window_label(average: &WindowAverage) -> String {
    match average.days {
        7 => "last week".to_string(),
        30 => "last month".to_string(),
        365 => "last year".to_string(),
        days => format!("last {} days", days),
    }
}

/// `March 05, 2024`, in the given zone
pub fn format_date<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    instant.with_timezone(tz).format("%B %d, %Y").to_string()
}

/// en-US digit grouping: `1234567` -> `1,234,567`
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn write_json_report(summary: &ExplorerSummary, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}

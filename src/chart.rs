// Terminal line chart
use colored::*;

use crate::config::ChartConfig;

/// ASCII line chart with a labelled y axis
#[derive(Debug, Clone)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub height: usize,
    pub width: usize,
}

impl LineChart {
    pub fn new(title: &str, config: &ChartConfig) -> Self {
        Self {
            title: title.to_string(),
            x_label: String::new(),
            y_label: String::new(),
            height: config.height.max(1),
            width: config.width.max(1),
        }
    }

    pub fn with_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
        self
    }

    /// Render the series; series longer than `width` are averaged down
    pub fn render(&self, series: &[usize]) -> String {
        let mut lines = vec![self.title.bold().to_string()];

        if series.is_empty() {
            lines.push("(no data)".dimmed().to_string());
            return lines.join("\n");
        }

        let points = resample(series, self.width);
        let min = points.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = points.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        let rows = self.height - 1;
        let ratio = if range > 0.0 { rows as f64 / range } else { 0.0 };
        let level = |value: f64| ((value - min) * ratio).round() as usize;

        let mut grid = vec![vec![' '; points.len()]; rows + 1];
        for (x, &value) in points.iter().enumerate() {
            let y0 = level(value);
            let y1 = points.get(x + 1).map(|&next| level(next)).unwrap_or(y0);

            if y0 == y1 {
                grid[rows - y0][x] = '─';
                continue;
            }

            grid[rows - y1][x] = if y0 > y1 { '╰' } else { '╭' };
            grid[rows - y0][x] = if y0 > y1 { '╮' } else { '╯' };
            for y in y0.min(y1) + 1..y0.max(y1) {
                grid[rows - y][x] = '│';
            }
        }

        let labels: Vec<String> = (0..=rows)
            .map(|row| {
                let y = rows - row;
                let value = if ratio > 0.0 { min + y as f64 / ratio } else { min };
                format!("{:.0}", value)
            })
            .collect();
        let label_width = labels
            .iter()
            .map(|l| l.len())
            .max()
            .unwrap_or(0)
            .max(self.y_label.chars().count());

        if !self.y_label.is_empty() {
            lines.push(format!("{:>w$}", self.y_label, w = label_width));
        }
        for (label, row) in labels.iter().zip(grid) {
            let line: String = row.into_iter().collect();
            lines.push(format!("{:>w$} ┤{}", label, line.blue(), w = label_width));
        }
        lines.push(format!(
            "{:>w$} └{} {}",
            "",
            "─".repeat(points.len()),
            self.x_label,
            w = label_width
        ));

        lines.join("\n")
    }
}

/// Average consecutive runs of `series` so at most `width` points remain
fn resample(series: &[usize], width: usize) -> Vec<f64> {
    if series.len() <= width {
        return series.iter().map(|&v| v as f64).collect();
    }

    (0..width)
        .map(|i| {
            let start = i * series.len() / width;
            let end = ((i + 1) * series.len() / width).max(start + 1);
            let chunk = &series[start..end];
            chunk.iter().sum::<usize>() as f64 / chunk.len() as f64
        })
        .collect()
}

// SPDX-License-Identifier: MPL-2.0
//! Display formatting for dates, file sizes and durations.

use chrono::NaiveDateTime;

/// Named date layouts, all in US English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `January 5, 2024`
    #[default]
    Default,
    /// `Jan 5, 2024`
    Short,
    /// `03:04 PM`
    Time,
    /// `Friday, January 5, 2024`
    Full,
}

impl DateFormat {
    /// Looks up a layout by name. Unknown names give [`DateFormat::Default`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "short" => DateFormat::Short,
            "time" => DateFormat::Time,
            "full" => DateFormat::Full,
            _ => DateFormat::Default,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Default => "%B %-d, %Y",
            DateFormat::Short => "%b %-d, %Y",
            DateFormat::Time => "%I:%M %p",
            DateFormat::Full => "%A, %B %-d, %Y",
        }
    }
}

#[must_use]
pub fn format_date(date: &NaiveDateTime, format: DateFormat) -> String {
    date.format(format.pattern()).to_string()
}

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Formats a byte count with base-1024 units and up to two decimals.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // f64 Display drops trailing zeros
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Formats seconds as `H:MM:SS`, or `M:SS` under an hour.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

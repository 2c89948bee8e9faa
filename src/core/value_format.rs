use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::core::CellValue;
use crate::error::{DashboardError, DashboardResult};

/// `M/D/YYYY h:mm:ss A`, e.g. `11/14/2023 10:13:20 PM`.
pub const AXIS_DATETIME_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// Length of a Unix-seconds value in the range the dashboard plots.
pub const UNIX_SECONDS_TEXT_LEN: usize = 10;

const MAX_OFFSET_SECONDS: i32 = 86_399;

/// Zone used when rendering timestamps for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "offset_seconds", rename_all = "snake_case")]
pub enum DisplayTimeZone {
    #[default]
    Local,
    Utc,
    FixedOffset(i32),
}

impl DisplayTimeZone {
    pub fn validate(self) -> DashboardResult<()> {
        match self {
            Self::FixedOffset(seconds) if seconds.abs() > MAX_OFFSET_SECONDS => {
                Err(DashboardError::InvalidConfig(format!(
                    "time zone offset must be within +/-{MAX_OFFSET_SECONDS} seconds, got {seconds}"
                )))
            }
            _ => Ok(()),
        }
    }

    fn format(self, instant: DateTime<Utc>) -> String {
        match self {
            Self::Utc => instant.format(AXIS_DATETIME_FORMAT).to_string(),
            Self::Local => instant
                .with_timezone(&Local)
                .format(AXIS_DATETIME_FORMAT)
                .to_string(),
            Self::FixedOffset(seconds) => match FixedOffset::east_opt(seconds) {
                Some(offset) => instant
                    .with_timezone(&offset)
                    .format(AXIS_DATETIME_FORMAT)
                    .to_string(),
                None => instant.format(AXIS_DATETIME_FORMAT).to_string(),
            },
        }
    }
}

/// Reads `text` as Unix seconds when it has exactly the 10-character epoch shape.
///
/// Fractional seconds are accepted as long as the whole text stays 10 characters.
#[must_use]
pub fn parse_unix_seconds(text: &str) -> Option<DateTime<Utc>> {
    if text.chars().count() != UNIX_SECONDS_TEXT_LEN {
        return None;
    }
    let seconds: f64 = text.parse().ok()?;
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1_000.0).round() as i64)
}

/// Formats an axis tick or tooltip value.
///
/// Epoch-shaped values become a date-time string, everything else is returned as-is.
#[must_use]
pub fn format_axis_value(text: &str, time_zone: DisplayTimeZone) -> Cow<'_, str> {
    match parse_unix_seconds(text) {
        Some(instant) => Cow::Owned(time_zone.format(instant)),
        None => Cow::Borrowed(text),
    }
}

/// Shared formatter for axis ticks and tooltip content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisValueFormatter {
    pub time_zone: DisplayTimeZone,
}

impl AxisValueFormatter {
    #[must_use]
    pub const fn new(time_zone: DisplayTimeZone) -> Self {
        Self { time_zone }
    }

    #[must_use]
    pub fn format_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        format_axis_value(text, self.time_zone)
    }

    #[must_use]
    pub fn format_cell(&self, value: &CellValue) -> String {
        let text = value.to_string();
        match parse_unix_seconds(&text) {
            Some(instant) => self.time_zone.format(instant),
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_seconds_format_in_utc() {
        let formatted = format_axis_value("1700000000", DisplayTimeZone::Utc);
        assert_eq!(formatted, "11/14/2023 10:13:20 PM");
    }

    #[test]
    fn fixed_offset_shifts_wall_clock() {
        let formatted = format_axis_value("1700000000", DisplayTimeZone::FixedOffset(-5 * 3600));
        assert_eq!(formatted, "11/14/2023 5:13:20 PM");
    }

    #[test]
    fn non_epoch_shapes_pass_through() {
        for raw in ["123", "17000000000", "abcdefghij", "", "temp"] {
            assert!(matches!(
                format_axis_value(raw, DisplayTimeZone::Utc),
                Cow::Borrowed(text) if text == raw
            ));
        }
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        assert!(DisplayTimeZone::FixedOffset(90_000).validate().is_err());
        assert!(DisplayTimeZone::FixedOffset(3_600).validate().is_ok());
    }
}

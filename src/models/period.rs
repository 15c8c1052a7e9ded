//! Calendar period representation
//!
//! Periods are half-open intervals: a period owns its start date and every
//! date up to, but not including, its end date. A transaction dated exactly
//! on the boundary therefore belongs to the following period, never to both.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a calendar period
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Period {
    /// Calendar month (e.g., "2025-01")
    Monthly { year: i32, month: u32 },

    /// Custom date range, end exclusive
    Custom { start: NaiveDate, end: NaiveDate },
}

impl Period {
    /// Create a monthly period
    pub fn monthly(year: i32, month: u32) -> Self {
        Self::Monthly { year, month }
    }

    /// Create a custom period (end exclusive)
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Custom { start, end }
    }

    /// Get the current monthly period
    pub fn current_month() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::Monthly {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Get the monthly period containing the given date
    pub fn month_of(date: NaiveDate) -> Self {
        Self::Monthly {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the start date of this period (inclusive)
    pub fn start_date(&self) -> NaiveDate {
        match self {
            Self::Monthly { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1)
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(*year, 1, 1).unwrap()),
            Self::Custom { start, .. } => *start,
        }
    }

    /// Get the end date of this period (exclusive)
    pub fn end_date(&self) -> NaiveDate {
        match self {
            Self::Monthly { year, month } => {
                let next_month = if *month == 12 {
                    NaiveDate::from_ymd_opt(*year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(*year, *month + 1, 1)
                };
                next_month.unwrap_or_else(|| self.start_date())
            }
            Self::Custom { end, .. } => *end,
        }
    }

    /// Check if a date falls within this period
    ///
    /// The interval is half-open: the start date is in, the end date is out.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date < self.end_date()
    }

    /// Get the next period
    pub fn next(&self) -> Self {
        match self {
            Self::Monthly { year, month } => {
                if *month == 12 {
                    Self::Monthly {
                        year: *year + 1,
                        month: 1,
                    }
                } else {
                    Self::Monthly {
                        year: *year,
                        month: *month + 1,
                    }
                }
            }
            Self::Custom { start, end } => {
                let duration = *end - *start;
                Self::Custom {
                    start: *end,
                    end: *end + duration,
                }
            }
        }
    }

    /// Get the previous period
    pub fn prev(&self) -> Self {
        match self {
            Self::Monthly { year, month } => {
                if *month == 1 {
                    Self::Monthly {
                        year: *year - 1,
                        month: 12,
                    }
                } else {
                    Self::Monthly {
                        year: *year,
                        month: *month - 1,
                    }
                }
            }
            Self::Custom { start, end } => {
                let duration = *end - *start;
                Self::Custom {
                    start: *start - duration,
                    end: *start,
                }
            }
        }
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Monthly: "2025-01"
    /// - Custom: "2025-01-01..2025-01-15" (end exclusive)
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        // Try custom range format (contains ..)
        if s.contains("..") {
            let parts: Vec<&str> = s.split("..").collect();
            if parts.len() == 2 {
                let start = NaiveDate::parse_from_str(parts[0], "%Y-%m-%d")
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                let end = NaiveDate::parse_from_str(parts[1], "%Y-%m-%d")
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                return Ok(Self::Custom { start, end });
            }
        }

        // Try monthly format (YYYY-MM)
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() == 2 {
            let year: i32 = parts[0]
                .parse()
                .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
            let month: u32 = parts[1]
                .parse()
                .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

            if !(1..=12).contains(&month) {
                return Err(PeriodParseError::InvalidMonth(month));
            }

            return Ok(Self::Monthly { year, month });
        }

        Err(PeriodParseError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Custom { start, end } => {
                write!(
                    f,
                    "{}..{}",
                    start.format("%Y-%m-%d"),
                    end.format("%Y-%m-%d")
                )
            }
        }
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start_date().cmp(&other.start_date())
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_period() {
        let period = Period::monthly(2025, 1);
        assert_eq!(
            period.start_date(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        // End is exclusive: the first day of the next month
        assert_eq!(
            period.end_date(),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_december_end_rolls_year() {
        let period = Period::monthly(2024, 12);
        assert_eq!(
            period.end_date(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_contains_is_half_open() {
        let jan = Period::monthly(2025, 1);
        assert!(jan.contains(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(jan.contains(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));

        // The boundary date belongs to the next period, not this one
        let boundary = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert!(!jan.contains(boundary));
        assert!(jan.next().contains(boundary));
    }

    #[test]
    fn test_monthly_navigation() {
        let jan = Period::monthly(2025, 1);
        let feb = jan.next();
        assert_eq!(feb, Period::monthly(2025, 2));

        let dec = Period::monthly(2024, 12);
        let jan2025 = dec.next();
        assert_eq!(jan2025, Period::monthly(2025, 1));

        assert_eq!(jan.prev(), Period::monthly(2024, 12));
    }

    #[test]
    fn test_custom_navigation() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let period = Period::custom(start, end);

        let next = period.next();
        assert_eq!(next.start_date(), end);
        assert_eq!(
            next.end_date(),
            NaiveDate::from_ymd_opt(2025, 1, 29).unwrap()
        );

        // Adjacent periods never share a date
        assert!(period.contains(NaiveDate::from_ymd_opt(2025, 1, 14).unwrap()));
        assert!(!period.contains(end));
        assert!(next.contains(end));

        assert_eq!(period.prev().end_date(), start);
    }

    #[test]
    fn test_month_of() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(Period::month_of(date), Period::monthly(2025, 3));
    }

    #[test]
    fn test_parse_monthly() {
        let period = Period::parse("2025-01").unwrap();
        assert_eq!(period, Period::monthly(2025, 1));
    }

    #[test]
    fn test_parse_custom() {
        let period = Period::parse("2025-01-01..2025-01-15").unwrap();
        assert_eq!(
            period,
            Period::custom(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
            )
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Period::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            Period::parse("not a period"),
            Err(PeriodParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Period::monthly(2025, 1)), "2025-01");
        assert_eq!(
            format!(
                "{}",
                Period::custom(
                    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
                )
            ),
            "2025-01-01..2025-01-15"
        );
    }

    #[test]
    fn test_ordering() {
        let jan = Period::monthly(2025, 1);
        let feb = Period::monthly(2025, 2);
        assert!(jan < feb);
    }

    #[test]
    fn test_serialization() {
        let period = Period::monthly(2025, 1);
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}

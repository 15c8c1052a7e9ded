//! Work schedule model
//!
//! Each schedule carries a fixed weekly-hours figure; the income projection
//! chain starts from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employment schedule types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkSchedule {
    /// 40 hours per week
    #[default]
    FullTime,
    /// 20 hours per week
    PartTime,
    /// 30 hours per week
    Freelance,
    /// 35 hours per week
    Contract,
}

impl WorkSchedule {
    /// Get all schedules in display order
    pub fn all() -> &'static [Self] {
        &[Self::FullTime, Self::PartTime, Self::Freelance, Self::Contract]
    }

    /// Weekly working hours for this schedule
    pub fn hours_per_week(&self) -> f64 {
        match self {
            Self::FullTime => 40.0,
            Self::PartTime => 20.0,
            Self::Freelance => 30.0,
            Self::Contract => 35.0,
        }
    }
}

impl fmt::Display for WorkSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullTime => write!(f, "Full Time"),
            Self::PartTime => write!(f, "Part Time"),
            Self::Freelance => write!(f, "Freelance"),
            Self::Contract => write!(f, "Contract"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_per_week() {
        assert_eq!(WorkSchedule::FullTime.hours_per_week(), 40.0);
        assert_eq!(WorkSchedule::PartTime.hours_per_week(), 20.0);
        assert_eq!(WorkSchedule::Freelance.hours_per_week(), 30.0);
        assert_eq!(WorkSchedule::Contract.hours_per_week(), 35.0);
    }

    #[test]
    fn test_all_schedules() {
        let all = WorkSchedule::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], WorkSchedule::FullTime);
    }

    #[test]
    fn test_default() {
        assert_eq!(WorkSchedule::default(), WorkSchedule::FullTime);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", WorkSchedule::FullTime), "Full Time");
        assert_eq!(format!("{}", WorkSchedule::Freelance), "Freelance");
    }

    #[test]
    fn test_serialization() {
        let schedule = WorkSchedule::PartTime;
        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(json, "\"parttime\"");

        let deserialized: WorkSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, deserialized);
    }
}

//! Reports module
//!
//! Provides the aggregation layer: period overviews with trend metrics,
//! expense breakdowns, and income projections.

pub mod breakdown;
pub mod overview;
pub mod projection;

pub use breakdown::ExpenseBreakdown;
pub use overview::{month_over_month_change, CategorySpend, MonthlyOverview, PeriodAggregate};
pub use projection::{total_monthly_payments, IncomeProjection, IncomeProjectionReport};

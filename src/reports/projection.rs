//! Income projection report
//!
//! Projects future income from a work schedule and hourly rate, then sets
//! projected income against a period's expenses and loan obligations.
//! Projection math runs in f64 major units; record amounts cross over via
//! `Money::to_f64` at this boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::breakdown::ExpenseBreakdown;
use crate::models::{Loan, LoanPaymentStatus, Money, WorkSchedule};

/// Projected income figures chained from an hourly rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeProjection {
    pub schedule: WorkSchedule,
    pub hourly_rate: f64,
    pub daily_income: f64,
    pub weekly_income: f64,
    pub monthly_income: f64,
    pub yearly_income: f64,
}

impl IncomeProjection {
    /// Project income figures for a schedule and hourly rate
    ///
    /// Each figure is built from the one before it rather than recomputed
    /// from the rate, so `weekly_income` is exactly `daily_income * 7` and
    /// the yearly figure is exactly 52 weeks.
    pub fn new(schedule: WorkSchedule, hourly_rate: f64) -> Self {
        let daily_income = hourly_rate * (schedule.hours_per_week() / 7.0);
        let weekly_income = daily_income * 7.0;
        let monthly_income = weekly_income * (52.0 / 12.0);
        let yearly_income = weekly_income * 52.0;

        Self {
            schedule,
            hourly_rate,
            daily_income,
            weekly_income,
            monthly_income,
            yearly_income,
        }
    }
}

/// Projected income set against a period's expenses and loan obligations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeProjectionReport {
    /// The underlying projection chain
    pub projection: IncomeProjection,
    /// Income figure the availability projection uses
    pub projected_income: f64,
    /// The period's expense buckets
    pub expenses: ExpenseBreakdown,
    /// Monthly loan obligations
    pub loan_payments: Money,
    /// Monthly income minus expenses and loan payments
    pub available_income: f64,
    /// Projected income minus expenses and loan payments
    pub projected_available_income: f64,
    /// Projected income minus expenses, before loan payments
    pub income_gap: f64,
}

impl IncomeProjectionReport {
    /// Compute the report
    ///
    /// `projected_income` falls back to the computed monthly income when the
    /// host supplies none. Negative results are never clamped; overspending
    /// has to stay visible.
    pub fn compute(
        schedule: WorkSchedule,
        hourly_rate: f64,
        projected_income: Option<f64>,
        expenses: ExpenseBreakdown,
        loan_payments: Money,
    ) -> Self {
        let projection = IncomeProjection::new(schedule, hourly_rate);
        let projected_income = projected_income.unwrap_or(projection.monthly_income);

        let total_expenses = expenses.total_expenses().to_f64();
        let payments = loan_payments.to_f64();

        let available_income = projection.monthly_income - total_expenses - payments;
        let projected_available_income = projected_income - total_expenses - payments;
        let income_gap = projected_income - total_expenses;

        Self {
            projection,
            projected_income,
            expenses,
            loan_payments,
            available_income,
            projected_available_income,
            income_gap,
        }
    }
}

/// Sum of monthly payments across loans still being repaid as of `today`
///
/// The canonical producer of the `loan_payments` input: paid-off loans are
/// excluded by derived status, not by the stored cache.
pub fn total_monthly_payments(loans: &[Loan], today: NaiveDate, grace_days: i64) -> Money {
    loans
        .iter()
        .filter(|loan| loan.derived_status(today, grace_days) != LoanPaymentStatus::Paid)
        .map(|loan| loan.monthly_payment)
        .sum()
}

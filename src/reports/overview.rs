//! Period overview report
//!
//! Buckets transactions into calendar periods and computes income, expense,
//! per-category, and trend metrics. Aggregation is total: empty periods
//! produce a well-defined zero aggregate rather than an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Money, Period, Transaction, TransactionCategory};

/// Spending in one category over a period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpend {
    /// The resolved category
    pub category: TransactionCategory,
    /// Total spent (absolute value)
    pub amount: Money,
    /// Number of transactions
    pub transaction_count: usize,
    /// Percentage of the period's total expenses
    pub percentage: f64,
}

/// Income, expenses, and category breakdown for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodAggregate {
    /// The period covered
    pub period: Period,
    /// Sum of positive amounts
    pub income: Money,
    /// Sum of expense magnitudes
    pub expenses: Money,
    /// Per-category spending, largest first
    pub by_category: Vec<CategorySpend>,
}

impl PeriodAggregate {
    /// Aggregate the transactions that fall within `period`
    ///
    /// Membership follows the period's half-open interval, so a transaction
    /// dated exactly on the period end lands in the next period. Positive
    /// amounts count as income, negative amounts as expenses, and zero
    /// amounts contribute to neither side.
    pub fn calculate(transactions: &[Transaction], period: &Period) -> Self {
        let mut income = Money::zero();
        let mut expenses = Money::zero();
        let mut category_spending: HashMap<TransactionCategory, (Money, usize)> = HashMap::new();

        for txn in transactions {
            if !period.contains(txn.date) {
                continue;
            }

            if txn.amount.is_positive() {
                income += txn.amount;
            } else if txn.amount.is_negative() {
                let spent = txn.amount.abs();
                expenses += spent;

                let entry = category_spending
                    .entry(txn.resolved_category())
                    .or_insert((Money::zero(), 0));
                entry.0 += spent;
                entry.1 += 1;
            }
        }

        let mut by_category: Vec<CategorySpend> = category_spending
            .into_iter()
            .map(|(category, (amount, count))| CategorySpend {
                category,
                amount,
                transaction_count: count,
                percentage: amount.percent_of(expenses),
            })
            .collect();

        // Largest spending first; ties break on the category identifier so
        // the order is stable
        by_category.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        });

        Self {
            period: period.clone(),
            income,
            expenses,
            by_category,
        }
    }

    /// Net flow for the period (income minus expenses)
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }

    /// Check if the period saw no activity
    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expenses.is_zero() && self.by_category.is_empty()
    }
}

/// Month-over-month percentage change between two income figures
///
/// Goes through the uniform percentage rule, so a month following a
/// zero-income month reports 0 rather than dividing by zero.
pub fn month_over_month_change(current: Money, previous: Money) -> f64 {
    (current - previous).percent_of(previous)
}

/// Current and previous month aggregates with the trend between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyOverview {
    /// The requested month
    pub current: PeriodAggregate,
    /// The month before it
    pub previous: PeriodAggregate,
    /// Income change from previous to current, in percent
    pub month_over_month_change: f64,
    /// Balance the month opened with, for normalization
    pub starting_balance: Money,
}

impl MonthlyOverview {
    /// Build the overview for one calendar month
    pub fn calculate(
        transactions: &[Transaction],
        year: i32,
        month: u32,
        starting_balance: Money,
    ) -> Self {
        let period = Period::monthly(year, month);
        let previous_period = period.prev();

        let current = PeriodAggregate::calculate(transactions, &period);
        let previous = PeriodAggregate::calculate(transactions, &previous_period);
        let change = month_over_month_change(current.income, previous.income);

        Self {
            current,
            previous,
            month_over_month_change: change,
            starting_balance,
        }
    }

    /// Net flow of the current month as a percentage of the starting balance
    pub fn net_percent_of_starting_balance(&self) -> f64 {
        self.current.net().percent_of(self.starting_balance)
    }
}

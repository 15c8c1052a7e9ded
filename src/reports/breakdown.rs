//! Expense breakdown report
//!
//! Groups a period's expenses into the five buckets the income projection
//! consumes: housing, food, transportation, loans, and everything else.

use serde::{Deserialize, Serialize};

use crate::models::{Money, Period, Transaction, TransactionCategory};

/// A period's expenses grouped into projection buckets
///
/// The loans bucket is fed from loan records via `set_loan_payments`; loan
/// obligations are not transactions, so `from_transactions` leaves it at
/// zero and a loan is never counted twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub housing: Money,
    pub food: Money,
    pub transportation: Money,
    pub loans: Money,
    pub other: Money,
}

impl ExpenseBreakdown {
    /// Create a breakdown from explicit bucket amounts
    pub fn new(housing: Money, food: Money, transportation: Money, loans: Money, other: Money) -> Self {
        Self {
            housing,
            food,
            transportation,
            loans,
            other,
        }
    }

    /// Build the breakdown from the expenses that fall within `period`
    ///
    /// Housing, Food, and Transport map to their own buckets; every other
    /// expense category pools into `other`. Income and zero amounts are
    /// skipped.
    pub fn from_transactions(transactions: &[Transaction], period: &Period) -> Self {
        let mut breakdown = Self::default();

        for txn in transactions {
            if !period.contains(txn.date) || !txn.is_expense() {
                continue;
            }

            let amount = txn.amount.abs();
            match txn.resolved_category() {
                TransactionCategory::Housing => breakdown.housing += amount,
                TransactionCategory::Food => breakdown.food += amount,
                TransactionCategory::Transport => breakdown.transportation += amount,
                _ => breakdown.other += amount,
            }
        }

        breakdown
    }

    /// Set the loans bucket from loan records
    pub fn set_loan_payments(&mut self, amount: Money) {
        self.loans = amount;
    }

    /// Total across all five buckets
    pub fn total_expenses(&self) -> Money {
        self.housing + self.food + self.transportation + self.loans + self.other
    }

    /// Housing share of the total, in percent
    pub fn housing_percent(&self) -> f64 {
        self.housing.percent_of(self.total_expenses())
    }

    /// Food share of the total, in percent
    pub fn food_percent(&self) -> f64 {
        self.food.percent_of(self.total_expenses())
    }

    /// Transportation share of the total, in percent
    pub fn transportation_percent(&self) -> f64 {
        self.transportation.percent_of(self.total_expenses())
    }

    /// Loans share of the total, in percent
    pub fn loans_percent(&self) -> f64 {
        self.loans.percent_of(self.total_expenses())
    }

    /// Remaining share of the total, in percent
    pub fn other_percent(&self) -> f64 {
        self.other.percent_of(self.total_expenses())
    }
}

//! Budget model
//!
//! A spending limit for one category over one period, tracked against the
//! amount actually spent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::period::Period;

/// A spending budget for a category and period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Raw category label; resolved at read time
    pub category: String,

    /// Spending limit for the period
    pub limit: Money,

    /// Amount spent so far (positive magnitude)
    #[serde(default)]
    pub spent: Money,

    /// The period this budget covers
    pub period: Period,

    /// When the budget was created
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget with nothing spent yet
    pub fn new(category: impl Into<String>, limit: Money, period: Period) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            limit,
            spent: Money::zero(),
            period,
            created_at: Utc::now(),
        }
    }

    /// Amount left before the limit is reached
    ///
    /// Negative once the budget is blown; overspending stays visible.
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    /// Check if spending has exceeded the limit
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.limit
    }

    /// Percentage of the limit used so far
    pub fn percent_used(&self) -> f64 {
        self.spent.percent_of(self.limit)
    }

    /// Add spending against this budget
    pub fn record_spend(&mut self, amount: Money) {
        self.spent += amount;
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if self.limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit);
        }

        if self.spent.is_negative() {
            return Err(BudgetValidationError::NegativeSpent);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} of {}",
            self.period, self.category, self.spent, self.limit
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeLimit,
    NegativeSpent,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NegativeLimit => write!(f, "Budget limit cannot be negative"),
            Self::NegativeSpent => write!(f, "Spent amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

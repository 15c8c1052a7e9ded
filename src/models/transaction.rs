//! Transaction model
//!
//! A transaction is an immutable financial fact. The sign of the amount is
//! the single source of truth for whether it is income or an expense;
//! income/expense accessors are derived from it and never stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{CategoryDescriptor, TransactionCategory};
use super::ids::{GoalId, TransactionId};
use super::money::Money;

/// Display attributes overriding the resolved category's defaults
///
/// Backfilled when the host wants a transaction to carry its own icon
/// instead of the category icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOverride {
    pub symbol: String,
    pub color: String,
    pub background: String,
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction title
    pub title: String,

    /// Optional subtitle (e.g., merchant detail)
    pub subtitle: Option<String>,

    /// Amount (positive for income, negative for expense)
    pub amount: Money,

    /// Raw category label; resolved at read time
    #[serde(default)]
    pub category: String,

    /// Transaction date
    pub date: NaiveDate,

    /// Linked savings goal, if any
    pub goal_id: Option<GoalId>,

    /// Display override, if backfilled
    pub display_override: Option<DisplayOverride>,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            title: title.into(),
            subtitle: None,
            amount,
            category: category.into(),
            date,
            goal_id: None,
            display_override: None,
            created_at: Utc::now(),
        }
    }

    /// Create a transaction with all common fields
    pub fn with_details(
        title: impl Into<String>,
        subtitle: Option<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        goal_id: Option<GoalId>,
    ) -> Self {
        let mut txn = Self::new(title, amount, category, date);
        txn.subtitle = subtitle;
        txn.goal_id = goal_id;
        txn
    }

    /// Check if this transaction is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this transaction is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Resolve the raw category label
    pub fn resolved_category(&self) -> TransactionCategory {
        TransactionCategory::resolve(&self.category)
    }

    /// Get the display descriptor for this transaction
    ///
    /// The override wins when present; otherwise the resolved category's
    /// descriptor applies.
    pub fn descriptor(&self) -> CategoryDescriptor {
        match &self.display_override {
            Some(display) => CategoryDescriptor {
                symbol: display.symbol.clone(),
                color: display.color.clone(),
                background: display.background.clone(),
            },
            None => self.resolved_category().descriptor(),
        }
    }

    /// Backfill the display override
    pub fn set_display_override(&mut self, display: DisplayOverride) {
        self.display_override = Some(display);
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyTitle,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Transaction title cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

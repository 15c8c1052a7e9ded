//! Loan model and payment-status derivation
//!
//! A loan stores a payment status for fast display, but the stored value is
//! a cache that can go stale. `derived_status` is the source of truth: a
//! pure function over the due dates, the remaining balance, and a reference
//! date. `refresh_status` is the explicit commit that writes the derivation
//! back into the cache.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::LoanId;
use super::money::Money;

/// Payment status of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoanPaymentStatus {
    /// Payments are on schedule
    #[default]
    Current,
    /// Past the due date, still inside the grace window
    Overdue,
    /// Past the due date and the grace window
    Missed,
    /// Nothing left to repay
    Paid,
}

impl LoanPaymentStatus {
    /// Get the status label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Overdue => "Overdue",
            Self::Missed => "Missed",
            Self::Paid => "Paid",
        }
    }
}

impl fmt::Display for LoanPaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A loan being repaid in monthly installments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier
    pub id: LoanId,

    /// Loan name
    pub name: String,

    /// Original amount borrowed
    pub principal: Money,

    /// Amount still owed; payments only ever decrease this
    pub remaining: Money,

    /// Annual interest rate in percent
    pub interest_rate: f64,

    /// Monthly installment
    pub monthly_payment: Money,

    /// First scheduled due date
    pub due_date: NaiveDate,

    /// Date of the most recent payment, if any
    pub last_payment_date: Option<NaiveDate>,

    /// Next scheduled due date; falls back to `due_date` while unset
    pub next_payment_due: Option<NaiveDate>,

    /// Raw category label; resolved at read time
    #[serde(default)]
    pub category: String,

    /// Cached payment status; may be stale until `refresh_status` runs
    #[serde(default)]
    pub status: LoanPaymentStatus,

    /// When the loan was created
    pub created_at: DateTime<Utc>,
}

impl Loan {
    /// Create a new loan with the full principal outstanding
    pub fn new(
        name: impl Into<String>,
        principal: Money,
        interest_rate: f64,
        monthly_payment: Money,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: LoanId::new(),
            name: name.into(),
            principal,
            remaining: principal,
            interest_rate,
            monthly_payment,
            due_date,
            last_payment_date: None,
            next_payment_due: None,
            category: String::new(),
            status: LoanPaymentStatus::Current,
            created_at: Utc::now(),
        }
    }

    /// The due date the next payment is measured against
    pub fn effective_next_due(&self) -> NaiveDate {
        self.next_payment_due.unwrap_or(self.due_date)
    }

    /// Derive the payment status as of `today`
    ///
    /// Priority order, first match wins: a fully repaid loan is `Paid` no
    /// matter how old its due dates are; past the grace window is `Missed`;
    /// past the due date is `Overdue`; everything else is `Current`. The
    /// due date itself is still on time.
    pub fn derived_status(&self, today: NaiveDate, grace_days: i64) -> LoanPaymentStatus {
        if !self.remaining.is_positive() {
            return LoanPaymentStatus::Paid;
        }

        let due = self.effective_next_due();
        if today > due + Duration::days(grace_days) {
            LoanPaymentStatus::Missed
        } else if today > due {
            LoanPaymentStatus::Overdue
        } else {
            LoanPaymentStatus::Current
        }
    }

    /// Recompute the cached status as of `today`
    pub fn refresh_status(&mut self, today: NaiveDate, grace_days: i64) {
        self.status = self.derived_status(today, grace_days);
    }

    /// Record a payment made on `date`
    ///
    /// Decrements the remaining balance (never below zero), stamps the
    /// payment date, advances the next due date by one calendar month, and
    /// refreshes the cached status.
    pub fn record_payment(&mut self, amount: Money, date: NaiveDate, grace_days: i64) {
        self.remaining -= amount;
        if self.remaining.is_negative() {
            self.remaining = Money::zero();
        }

        self.last_payment_date = Some(date);

        let due = self.effective_next_due();
        self.next_payment_due = Some(due.checked_add_months(Months::new(1)).unwrap_or(due));

        self.refresh_status(date, grace_days);
    }

    /// Percentage of the principal repaid so far
    pub fn progress_percent(&self) -> f64 {
        (self.principal - self.remaining).percent_of(self.principal)
    }

    /// Validate the loan
    pub fn validate(&self) -> Result<(), LoanValidationError> {
        if self.name.trim().is_empty() {
            return Err(LoanValidationError::EmptyName);
        }

        if self.principal.is_negative() {
            return Err(LoanValidationError::NegativePrincipal);
        }

        if self.remaining.is_negative() {
            return Err(LoanValidationError::NegativeRemaining);
        }

        if self.monthly_payment.is_negative() {
            return Err(LoanValidationError::NegativeMonthlyPayment);
        }

        Ok(())
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} remaining)", self.name, self.remaining)
    }
}

/// Validation errors for loans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanValidationError {
    EmptyName,
    NegativePrincipal,
    NegativeRemaining,
    NegativeMonthlyPayment,
}

impl fmt::Display for LoanValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Loan name cannot be empty"),
            Self::NegativePrincipal => write!(f, "Loan principal cannot be negative"),
            Self::NegativeRemaining => write!(f, "Remaining balance cannot be negative"),
            Self::NegativeMonthlyPayment => write!(f, "Monthly payment cannot be negative"),
        }
    }
}

impl std::error::Error for LoanValidationError {}

//! Core data models for the engine
//!
//! This module contains all the data structures that represent the finance
//! domain: transactions, categories, loans, budgets, periods, and the money
//! type they share.

pub mod budget;
pub mod category;
pub mod ids;
pub mod loan;
pub mod money;
pub mod period;
pub mod transaction;
pub mod work_schedule;

pub use budget::Budget;
pub use category::{CategoryDescriptor, TransactionCategory};
pub use ids::{BudgetId, GoalId, LoanId, TransactionId};
pub use loan::{Loan, LoanPaymentStatus};
pub use money::Money;
pub use period::Period;
pub use transaction::{DisplayOverride, Transaction};
pub use work_schedule::WorkSchedule;

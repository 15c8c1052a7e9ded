//! CSV document rendering
//!
//! Renders transactions, budgets, and loans into comma-delimited text. One
//! header row per document, one row per record, dates fixed to YYYY-MM-DD,
//! amounts with two decimals. Fields are escaped only when they need it:
//! a field containing a comma, quote, or newline is quote-wrapped with
//! internal quotes doubled, everything else is written as-is.

use chrono::NaiveDate;

use crate::error::{ExportError, ExportResult};
use crate::models::{Budget, Loan, Transaction, TransactionCategory};

/// Render transactions into a CSV document
pub fn render_transactions(transactions: &[Transaction]) -> ExportResult<String> {
    let mut out = String::new();
    out.push_str("Title,Amount,Category,Date,Type\n");

    for txn in transactions {
        let title = check_text(&txn.title, "transaction title")?;
        let kind = if txn.is_income() { "Income" } else { "Expense" };

        out.push_str(&format!(
            "{},{:.2},{},{},{}\n",
            escape_csv(title),
            txn.amount.to_f64(),
            txn.resolved_category().as_str(),
            txn.date.format("%Y-%m-%d"),
            kind
        ));
    }

    Ok(out)
}

/// Render budgets into a CSV document
pub fn render_budgets(budgets: &[Budget]) -> ExportResult<String> {
    let mut out = String::new();
    out.push_str("Category,Limit,Spent,Period\n");

    for budget in budgets {
        out.push_str(&format!(
            "{},{:.2},{:.2},{}\n",
            TransactionCategory::resolve(&budget.category).as_str(),
            budget.limit.to_f64(),
            budget.spent.to_f64(),
            budget.period
        ));
    }

    Ok(out)
}

/// Render loans into a CSV document
///
/// The status column carries the status derived at `as_of`; the stored
/// cache is never exported, so the document is a function of its inputs.
pub fn render_loans(loans: &[Loan], as_of: NaiveDate, grace_days: i64) -> ExportResult<String> {
    let mut out = String::new();
    out.push_str("Name,Principal,Remaining,Rate,MonthlyPayment,DueDate,Status\n");

    for loan in loans {
        let name = check_text(&loan.name, "loan name")?;
        if !loan.interest_rate.is_finite() {
            return Err(ExportError::DataProcessingFailed(format!(
                "non-finite interest rate for loan '{}'",
                name
            )));
        }

        out.push_str(&format!(
            "{},{:.2},{:.2},{:.2},{:.2},{},{}\n",
            escape_csv(name),
            loan.principal.to_f64(),
            loan.remaining.to_f64(),
            loan.interest_rate,
            loan.monthly_payment.to_f64(),
            loan.effective_next_due().format("%Y-%m-%d"),
            loan.derived_status(as_of, grace_days).as_str()
        ));
    }

    Ok(out)
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Reject text that CSV escaping cannot represent faithfully
///
/// Tabs and newlines are allowed (newlines force quoting); any other
/// control character fails the whole document.
fn check_text<'a>(field: &'a str, context: &str) -> ExportResult<&'a str> {
    if field
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\t')
    {
        return Err(ExportError::DataProcessingFailed(format!(
            "control character in {}",
            context
        )));
    }
    Ok(field)
}

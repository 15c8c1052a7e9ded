//! Export pipeline
//!
//! Coordinates rendering and delivery of CSV documents. One export runs
//! at a time per pipeline; a second attempt while one is running fails
//! fast with `ExportError::ExportInProgress` instead of queueing. A
//! document is rendered fully in memory before any byte reaches a sink,
//! so a failed export never leaves a partial file behind.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{ExportError, ExportResult};
use crate::export::csv;
use crate::models::{Budget, Loan, Transaction};

/// Which entities an export covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Transactions,
    Budgets,
    Loans,
    All,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Transactions => "transactions",
            ExportKind::Budgets => "budgets",
            ExportKind::Loans => "loans",
            ExportKind::All => "all",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Borrowed snapshot of the data an export reads
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportSources<'a> {
    pub transactions: &'a [Transaction],
    pub budgets: &'a [Budget],
    pub loans: &'a [Loan],
}

impl<'a> ExportSources<'a> {
    pub fn new(
        transactions: &'a [Transaction],
        budgets: &'a [Budget],
        loans: &'a [Loan],
    ) -> Self {
        ExportSources {
            transactions,
            budgets,
            loans,
        }
    }
}

/// A fully rendered export document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub kind: ExportKind,
    pub contents: String,
}

impl ExportDocument {
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

#[derive(Debug, Default)]
struct PipelineState {
    exporting: bool,
    last_error: Option<ExportError>,
}

/// Renders export documents and enforces the one-at-a-time rule
///
/// The pipeline holds no financial data itself; every export reads from
/// the `ExportSources` passed in and derives loan statuses at the given
/// `as_of` date, so the same inputs always produce the same document.
#[derive(Debug)]
pub struct ExportPipeline {
    state: Mutex<PipelineState>,
    grace_period_days: i64,
}

impl ExportPipeline {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        ExportPipeline {
            state: Mutex::new(PipelineState::default()),
            grace_period_days: config.grace_period_days,
        }
    }

    /// Render an export document without delivering it anywhere
    pub fn export(
        &self,
        kind: ExportKind,
        sources: ExportSources<'_>,
        as_of: NaiveDate,
    ) -> ExportResult<ExportDocument> {
        self.run(kind, sources, as_of, |_| Ok(()))
    }

    /// Render an export document and write it to `writer`
    pub fn export_to_writer<W: Write>(
        &self,
        kind: ExportKind,
        sources: ExportSources<'_>,
        as_of: NaiveDate,
        writer: &mut W,
    ) -> ExportResult<ExportDocument> {
        self.run(kind, sources, as_of, |doc| {
            writer
                .write_all(doc.contents.as_bytes())
                .map_err(|e| ExportError::FileCreationFailed(e.to_string()))
        })
    }

    /// Render an export document and write it to a file at `path`
    ///
    /// The file is only created once rendering has succeeded; a failed
    /// render leaves no file at `path`.
    pub fn export_to_path<P: AsRef<Path>>(
        &self,
        kind: ExportKind,
        sources: ExportSources<'_>,
        as_of: NaiveDate,
        path: P,
    ) -> ExportResult<ExportDocument> {
        self.run(kind, sources, as_of, |doc| {
            std::fs::write(path.as_ref(), doc.contents.as_bytes())
                .map_err(|e| ExportError::FileCreationFailed(e.to_string()))
        })
    }

    /// Whether an export is currently running
    pub fn is_exporting(&self) -> bool {
        self.lock_state().exporting
    }

    /// The error recorded by the most recent export, if it failed
    ///
    /// Cleared when the next export starts.
    pub fn last_error(&self) -> Option<ExportError> {
        self.lock_state().last_error.clone()
    }

    fn run<F>(
        &self,
        kind: ExportKind,
        sources: ExportSources<'_>,
        as_of: NaiveDate,
        deliver: F,
    ) -> ExportResult<ExportDocument>
    where
        F: FnOnce(&ExportDocument) -> ExportResult<()>,
    {
        let _guard = self.begin(kind)?;
        let outcome = self.render(kind, sources, as_of).and_then(|doc| {
            deliver(&doc)?;
            Ok(doc)
        });
        self.finish(kind, &outcome);
        outcome
    }

    /// Claim the pipeline for one export, or fail if one is running
    fn begin(&self, kind: ExportKind) -> ExportResult<ExportGuard<'_>> {
        let mut state = self.lock_state();
        if state.exporting {
            return Err(ExportError::ExportInProgress);
        }
        state.exporting = true;
        state.last_error = None;
        debug!("starting {} export", kind);
        Ok(ExportGuard { pipeline: self })
    }

    fn finish(&self, kind: ExportKind, outcome: &ExportResult<ExportDocument>) {
        match outcome {
            Ok(doc) => info!("{} export finished ({} bytes)", kind, doc.len()),
            Err(err) => {
                warn!("{} export failed: {}", kind, err);
                self.lock_state().last_error = Some(err.clone());
            }
        }
    }

    fn render(
        &self,
        kind: ExportKind,
        sources: ExportSources<'_>,
        as_of: NaiveDate,
    ) -> ExportResult<ExportDocument> {
        let contents = match kind {
            ExportKind::Transactions => {
                if sources.transactions.is_empty() {
                    return Err(ExportError::NoDataAvailable("transaction"));
                }
                csv::render_transactions(sources.transactions)?
            }
            ExportKind::Budgets => {
                if sources.budgets.is_empty() {
                    return Err(ExportError::NoDataAvailable("budget"));
                }
                csv::render_budgets(sources.budgets)?
            }
            ExportKind::Loans => {
                if sources.loans.is_empty() {
                    return Err(ExportError::NoDataAvailable("loan"));
                }
                csv::render_loans(sources.loans, as_of, self.grace_period_days)?
            }
            ExportKind::All => {
                if sources.transactions.is_empty()
                    && sources.budgets.is_empty()
                    && sources.loans.is_empty()
                {
                    return Err(ExportError::NoDataAvailable("transaction, budget, or loan"));
                }
                // Empty sections keep their headers so the section layout
                // is the same for every combined document
                let mut combined = String::new();
                combined.push_str("# Transactions\n");
                combined.push_str(&csv::render_transactions(sources.transactions)?);
                combined.push_str("# Budgets\n");
                combined.push_str(&csv::render_budgets(sources.budgets)?);
                combined.push_str("# Loans\n");
                combined.push_str(&csv::render_loans(
                    sources.loans,
                    as_of,
                    self.grace_period_days,
                )?);
                combined
            }
        };

        Ok(ExportDocument { kind, contents })
    }

    fn lock_state(&self) -> MutexGuard<'_, PipelineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the in-progress flag when an export ends, panics included
struct ExportGuard<'a> {
    pipeline: &'a ExportPipeline,
}

impl Drop for ExportGuard<'_> {
    fn drop(&mut self) {
        self.pipeline.lock_state().exporting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoanPaymentStatus, Money, Period};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::new("Salary", Money::from_minor(250000), "income", date(2025, 1, 5)),
            Transaction::new("Groceries", Money::from_minor(-8745), "food", date(2025, 1, 6)),
        ]
    }

    fn sample_budgets() -> Vec<Budget> {
        vec![Budget::new(
            "food",
            Money::from_minor(50000),
            Period::monthly(2025, 1),
        )]
    }

    fn sample_loans() -> Vec<Loan> {
        vec![Loan::new(
            "Car loan",
            Money::from_minor(1_200_000),
            4.5,
            Money::from_minor(35000),
            date(2025, 2, 1),
        )]
    }

    #[test]
    fn test_export_transactions() {
        let pipeline = ExportPipeline::new();
        let transactions = sample_transactions();
        let sources = ExportSources::new(&transactions, &[], &[]);

        let doc = pipeline
            .export(ExportKind::Transactions, sources, date(2025, 1, 31))
            .unwrap();

        assert_eq!(doc.kind, ExportKind::Transactions);
        assert!(doc.contents.starts_with("Title,Amount,Category,Date,Type\n"));
        assert!(doc.contents.contains("Salary,2500.00,income,2025-01-05,Income"));
        assert!(!pipeline.is_exporting());
        assert!(pipeline.last_error().is_none());
    }

    #[test]
    fn test_export_empty_kind_fails() {
        let pipeline = ExportPipeline::new();

        let err = pipeline
            .export(
                ExportKind::Transactions,
                ExportSources::default(),
                date(2025, 1, 31),
            )
            .unwrap_err();

        assert_eq!(err, ExportError::NoDataAvailable("transaction"));
        assert_eq!(
            err.to_string(),
            "No transaction data available to export"
        );
    }

    #[test]
    fn test_export_all_keeps_section_order() {
        let pipeline = ExportPipeline::new();
        let transactions = sample_transactions();
        let loans = sample_loans();
        // Budgets intentionally empty: the section header must still appear
        let sources = ExportSources::new(&transactions, &[], &loans);

        let doc = pipeline
            .export(ExportKind::All, sources, date(2025, 1, 15))
            .unwrap();

        let t = doc.contents.find("# Transactions\n").unwrap();
        let b = doc.contents.find("# Budgets\n").unwrap();
        let l = doc.contents.find("# Loans\n").unwrap();
        assert!(t < b && b < l);
        assert!(doc.contents.contains("Category,Limit,Spent,Period\n# Loans"));
    }

    #[test]
    fn test_export_all_fails_only_when_everything_empty() {
        let pipeline = ExportPipeline::new();

        let err = pipeline
            .export(ExportKind::All, ExportSources::default(), date(2025, 1, 15))
            .unwrap_err();
        assert_eq!(
            err,
            ExportError::NoDataAvailable("transaction, budget, or loan")
        );

        let budgets = sample_budgets();
        let sources = ExportSources::new(&[], &budgets, &[]);
        assert!(pipeline
            .export(ExportKind::All, sources, date(2025, 1, 15))
            .is_ok());
    }

    #[test]
    fn test_export_is_idempotent() {
        let pipeline = ExportPipeline::new();
        let transactions = sample_transactions();
        let budgets = sample_budgets();
        let loans = sample_loans();
        let sources = ExportSources::new(&transactions, &budgets, &loans);

        let first = pipeline
            .export(ExportKind::All, sources, date(2025, 1, 15))
            .unwrap();
        let second = pipeline
            .export(ExportKind::All, sources, date(2025, 1, 15))
            .unwrap();

        assert_eq!(first.contents, second.contents);
    }

    #[test]
    fn test_concurrent_export_rejected() {
        let pipeline = ExportPipeline::new();
        let transactions = sample_transactions();
        let sources = ExportSources::new(&transactions, &[], &[]);

        let guard = pipeline.begin(ExportKind::All).unwrap();
        assert!(pipeline.is_exporting());

        let err = pipeline
            .export(ExportKind::Transactions, sources, date(2025, 1, 31))
            .unwrap_err();
        assert_eq!(err, ExportError::ExportInProgress);

        drop(guard);
        assert!(!pipeline.is_exporting());
        assert!(pipeline
            .export(ExportKind::Transactions, sources, date(2025, 1, 31))
            .is_ok());
    }

    #[test]
    fn test_rejected_attempt_does_not_clobber_state() {
        let pipeline = ExportPipeline::new();

        let guard = pipeline.begin(ExportKind::Loans).unwrap();
        let _ = pipeline
            .export(ExportKind::Loans, ExportSources::default(), date(2025, 1, 1))
            .unwrap_err();

        // The running export still owns the flag
        assert!(pipeline.is_exporting());
        drop(guard);
    }

    #[test]
    fn test_last_error_recorded_and_cleared() {
        let pipeline = ExportPipeline::new();

        let _ = pipeline
            .export(ExportKind::Budgets, ExportSources::default(), date(2025, 1, 15))
            .unwrap_err();
        assert_eq!(
            pipeline.last_error(),
            Some(ExportError::NoDataAvailable("budget"))
        );

        let budgets = sample_budgets();
        let sources = ExportSources::new(&[], &budgets, &[]);
        pipeline
            .export(ExportKind::Budgets, sources, date(2025, 1, 15))
            .unwrap();
        assert!(pipeline.last_error().is_none());
    }

    #[test]
    fn test_export_to_writer() {
        let pipeline = ExportPipeline::new();
        let budgets = sample_budgets();
        let sources = ExportSources::new(&[], &budgets, &[]);
        let mut buffer = Vec::new();

        let doc = pipeline
            .export_to_writer(ExportKind::Budgets, sources, date(2025, 1, 15), &mut buffer)
            .unwrap();

        assert_eq!(buffer, doc.contents.as_bytes());
    }

    #[test]
    fn test_export_to_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("loans.csv");

        let pipeline = ExportPipeline::new();
        let loans = sample_loans();
        let sources = ExportSources::new(&[], &[], &loans);

        let doc = pipeline
            .export_to_path(ExportKind::Loans, sources, date(2025, 1, 15), &path)
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, doc.contents);
    }

    #[test]
    fn test_failed_render_leaves_no_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");

        let pipeline = ExportPipeline::new();
        let err = pipeline
            .export_to_path(
                ExportKind::Transactions,
                ExportSources::default(),
                date(2025, 1, 15),
                &path,
            )
            .unwrap_err();

        assert!(err.is_no_data());
        assert!(!path.exists());
    }

    #[test]
    fn test_loan_status_derived_at_as_of() {
        let pipeline = ExportPipeline::new();
        let mut loans = sample_loans();
        loans[0].status = LoanPaymentStatus::Current;
        let sources = ExportSources::new(&[], &[], &loans);

        // Due 2025-02-01 with a 5 day grace: well past it by mid-March
        let doc = pipeline
            .export(ExportKind::Loans, sources, date(2025, 3, 15))
            .unwrap();
        assert!(doc.contents.contains(",Missed"));

        let doc = pipeline
            .export(ExportKind::Loans, sources, date(2025, 1, 15))
            .unwrap();
        assert!(doc.contents.contains(",Current"));
    }

    #[test]
    fn test_grace_period_from_config() {
        let config = EngineConfig {
            grace_period_days: 30,
            ..EngineConfig::default()
        };
        let pipeline = ExportPipeline::with_config(&config);
        let loans = sample_loans();
        let sources = ExportSources::new(&[], &[], &loans);

        // 2025-02-20 is past due but inside the wider grace window
        let doc = pipeline
            .export(ExportKind::Loans, sources, date(2025, 2, 20))
            .unwrap();
        assert!(doc.contents.contains(",Overdue"));
    }
}

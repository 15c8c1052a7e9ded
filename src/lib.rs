//! fintally - Financial aggregation and reporting engine
//!
//! This library derives reporting views from financial records supplied
//! by the caller: monthly spending summaries, loan payment statuses,
//! income projections, and CSV exports. It owns no storage and no UI;
//! hosts feed it transactions, budgets, and loans and read back reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Engine settings supplied by the caller
//! - `error`: Export error types
//! - `models`: Core data models (money, transactions, loans, budgets)
//! - `reports`: Period aggregation, expense breakdowns, income projection
//! - `export`: CSV rendering and the export pipeline
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fintally::export::{ExportKind, ExportPipeline, ExportSources};
//! use fintally::models::{Money, Transaction};
//!
//! let transactions = vec![Transaction::new(
//!     "Groceries",
//!     Money::from_minor(-8745),
//!     "food",
//!     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
//! )];
//!
//! let pipeline = ExportPipeline::new();
//! let doc = pipeline.export(
//!     ExportKind::Transactions,
//!     ExportSources::new(&transactions, &[], &[]),
//!     NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
//! )?;
//! assert!(doc.contents.starts_with("Title,Amount,Category,Date,Type"));
//! # Ok::<(), fintally::ExportError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;

use std::sync::Once;

pub use error::{ExportError, ExportResult};

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Optional; hosts that install their own subscriber skip this. Safe to
/// call more than once.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("fintally=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

//! Export module for fintally
//!
//! Renders transactions, budgets, and loans into CSV documents and
//! coordinates their delivery through a one-at-a-time pipeline.

pub mod csv;
pub mod pipeline;

pub use csv::{render_budgets, render_loans, render_transactions};
pub use pipeline::{ExportDocument, ExportKind, ExportPipeline, ExportSources};

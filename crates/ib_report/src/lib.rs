//! ib_report/src/lib.rs: Closed-issue summary model + JSON renderer.
//!
//! Determinism rules:
//! - No network, no I/O here. Callers supply the snapshot already in memory.
//! - Rankings come from `ib_algo`; this crate never re-sorts them.
//! - Stable section order and field names.

#![deny(unsafe_code)]

use core::fmt;

pub mod render_json;
pub mod selected;
pub mod statistics;
pub mod structure;

pub use render_json::{render_summary_json, render_summary_json_string};
pub use selected::{project_selected, SelectedIdea};
pub use statistics::{compute_statistics, IssueStatistics};
pub use structure::{
    build_rankings, build_summary, IntegrityBlock, IssueBlock, Rankings, SummaryReport,
};

// ===== Errors =====
#[derive(Debug)]
pub enum ReportError {
    Serialize { section: &'static str, msg: String },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Serialize { section, msg } => write!(f, "serialize {section}: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}

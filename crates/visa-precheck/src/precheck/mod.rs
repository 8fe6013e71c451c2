//! Schengen pre-check domain: analysis intake, readiness derivation, and the
//! store/service/router seam the HTTP surface builds on.
//!
//! Everything under [`report`] is a pure function of one immutable
//! [`domain::AnalysisReport`] snapshot; re-running an analysis replaces the
//! snapshot, never mutates it.

pub mod catalog;
pub mod domain;
pub mod intake;
pub mod report;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use catalog::RequiredDocument;
pub use domain::{AnalysisReport, DocCategory, DocRole, DocStatus, FileMeta, RuleVerdict};
pub use intake::{AnalysisIntake, AnalysisIntakeError};
pub use report::views::{
    ChecklistRowView, ChecklistTone, DocumentVerdictView, PrecheckReportView, ReadinessLevel,
    ScoreBreakdownEntry,
};
pub use report::{
    assess_readiness, assess_readiness_with_uploads, derive_report, reconcile_checklist,
    score_documents, split_findings, ADVISORY_NOTICE, CROSS_MARKER,
};
pub use router::precheck_router;
pub use service::{PrecheckService, PrecheckServiceError};
pub use store::{AnalysisId, AnalysisStatusView, AnalysisStore, StoreError, StoredAnalysis};

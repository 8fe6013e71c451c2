use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AnalysisReport, DocStatus};

/// Identifier wrapper for stored analysis runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub String);

/// One intaken analysis run kept for the results step. The embedded report is
/// immutable; a re-run stores a new record instead of touching this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub id: AnalysisId,
    pub received_at: DateTime<Utc>,
    pub report: AnalysisReport,
}

impl StoredAnalysis {
    pub fn status_view(&self) -> AnalysisStatusView {
        AnalysisStatusView {
            analysis_id: self.id.clone(),
            received_at: self.received_at,
            overall_status: self.report.overall_status,
            overall_status_label: self.report.overall_status.label(),
            verdict_count: self.report.verdicts.len(),
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation; the
/// service crate supplies the in-memory adapter.
pub trait AnalysisStore: Send + Sync {
    fn insert(&self, analysis: StoredAnalysis) -> Result<StoredAnalysis, StoreError>;
    fn fetch(&self, id: &AnalysisId) -> Result<Option<StoredAnalysis>, StoreError>;
    fn latest(&self) -> Result<Option<StoredAnalysis>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("analysis already exists")]
    Conflict,
    #[error("analysis not found")]
    NotFound,
    #[error("analysis store unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized receipt exposed after submission and on status lookups.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisStatusView {
    pub analysis_id: AnalysisId,
    pub received_at: DateTime<Utc>,
    pub overall_status: DocStatus,
    pub overall_status_label: &'static str,
    pub verdict_count: usize,
}

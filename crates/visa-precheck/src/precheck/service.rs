use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::AnalysisReport;
use super::intake::{AnalysisIntake, AnalysisIntakeError};
use super::report::derive_report;
use super::report::views::PrecheckReportView;
use super::store::{AnalysisId, AnalysisStore, StoreError, StoredAnalysis};

/// Service composing intake validation, storage, and report derivation.
pub struct PrecheckService<S> {
    store: Arc<S>,
}

static ANALYSIS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_analysis_id() -> AnalysisId {
    let id = ANALYSIS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AnalysisId(format!("analysis-{id:06}"))
}

impl<S> PrecheckService<S>
where
    S: AnalysisStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Intake a raw analysis service payload and store the resulting report.
    pub fn submit(
        &self,
        payload: serde_json::Value,
    ) -> Result<StoredAnalysis, PrecheckServiceError> {
        let report = AnalysisIntake::from_value(payload)?;
        self.submit_report(report)
    }

    /// Store an already-validated report under a fresh id.
    pub fn submit_report(
        &self,
        report: AnalysisReport,
    ) -> Result<StoredAnalysis, PrecheckServiceError> {
        let analysis = StoredAnalysis {
            id: next_analysis_id(),
            received_at: Utc::now(),
            report,
        };

        let stored = self.store.insert(analysis)?;
        info!(
            analysis_id = %stored.id.0,
            verdicts = stored.report.verdicts.len(),
            "analysis stored"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &AnalysisId) -> Result<StoredAnalysis, PrecheckServiceError> {
        let analysis = self.store.fetch(id)?.ok_or(StoreError::NotFound)?;
        Ok(analysis)
    }

    /// Derive the result-screen view for a stored analysis.
    pub fn report(
        &self,
        id: &AnalysisId,
        focus: Option<&str>,
    ) -> Result<PrecheckReportView, PrecheckServiceError> {
        let analysis = self.get(id)?;
        Ok(derive_report(&analysis.report, focus))
    }

    /// Derive the view for the most recently stored analysis, if any.
    pub fn latest_report(
        &self,
        focus: Option<&str>,
    ) -> Result<Option<PrecheckReportView>, PrecheckServiceError> {
        let analysis = self.store.latest()?;
        Ok(analysis.map(|stored| derive_report(&stored.report, focus)))
    }
}

/// Error raised by the pre-check service.
#[derive(Debug, thiserror::Error)]
pub enum PrecheckServiceError {
    #[error(transparent)]
    Intake(#[from] AnalysisIntakeError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

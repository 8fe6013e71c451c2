use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use visa_precheck::precheck::{AnalysisId, AnalysisStore, StoreError, StoredAnalysis};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps submitted analyses for the lifetime of the process, newest last.
#[derive(Default)]
pub(crate) struct InMemoryAnalysisStore {
    analyses: Mutex<Vec<StoredAnalysis>>,
}

impl AnalysisStore for InMemoryAnalysisStore {
    fn insert(&self, analysis: StoredAnalysis) -> Result<StoredAnalysis, StoreError> {
        let mut guard = self.analyses.lock().expect("store mutex poisoned");
        if guard.iter().any(|stored| stored.id == analysis.id) {
            return Err(StoreError::Conflict);
        }
        guard.push(analysis.clone());
        Ok(analysis)
    }

    fn fetch(&self, id: &AnalysisId) -> Result<Option<StoredAnalysis>, StoreError> {
        let guard = self.analyses.lock().expect("store mutex poisoned");
        Ok(guard.iter().find(|stored| &stored.id == id).cloned())
    }

    fn latest(&self) -> Result<Option<StoredAnalysis>, StoreError> {
        let guard = self.analyses.lock().expect("store mutex poisoned");
        Ok(guard.last().cloned())
    }
}

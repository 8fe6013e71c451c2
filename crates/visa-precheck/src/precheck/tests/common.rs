use std::collections::BTreeMap;
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::precheck::catalog::RequiredDocument;
use crate::precheck::domain::{AnalysisReport, DocCategory, DocRole, DocStatus, FileMeta, RuleVerdict};
use crate::precheck::store::{AnalysisId, AnalysisStore, StoreError, StoredAnalysis};

pub(super) fn verdict(key: &str, role: DocRole, status: DocStatus) -> RuleVerdict {
    RuleVerdict {
        file: FileMeta {
            filename: format!("{key}.pdf"),
            content_type: "application/pdf".to_string(),
            size_mb: 1.2,
        },
        category: DocCategory::from_key(key),
        role,
        pages_processed: 1,
        extracted_fields: BTreeMap::new(),
        status,
        findings: Vec::new(),
        actions: Vec::new(),
    }
}

pub(super) fn core_verdict(document: RequiredDocument, status: DocStatus) -> RuleVerdict {
    verdict(document.key(), DocRole::CoreRequired, status)
}

pub(super) fn all_ok_verdicts() -> Vec<RuleVerdict> {
    RequiredDocument::ordered()
        .into_iter()
        .map(|document| core_verdict(document, DocStatus::Ok))
        .collect()
}

pub(super) fn report_with(verdicts: Vec<RuleVerdict>) -> AnalysisReport {
    AnalysisReport {
        overall_status: DocStatus::Ok,
        findings: Vec::new(),
        actions: Vec::new(),
        verdicts,
        processing_duration_ms: 1500,
    }
}

pub(super) fn sample_wire_payload() -> Value {
    json!({
        "status": "warning",
        "reasons": [
            "Pasaport süresi yakında doluyor gibi görünüyor.",
            "[CROSS] Seyahat sigortası tarihleri uçuş tarihlerini yeterli tamponla kapsamıyor."
        ],
        "actions": [
            "Seyahat dönüş tarihine göre pasaport geçerliliğini kontrol et."
        ],
        "file_results": [
            {
                "file": {"filename": "pasaport.pdf", "content_type": "application/pdf", "size_mb": 2.1},
                "doc_type": "passport",
                "doc_role": "CORE_REQUIRED",
                "pages_processed": 1,
                "fields": {"has_mrz_signal": true},
                "rule": {"status": "warning", "reasons": ["Pasaport süresi yakında doluyor."], "actions": []}
            },
            {
                "file": {"filename": "sigorta.pdf", "content_type": "application/pdf", "size_mb": 0.9},
                "doc_type": "travel_insurance",
                "doc_role": "CORE_REQUIRED",
                "pages_processed": 2,
                "rule": {"status": "ok", "reasons": [], "actions": []}
            }
        ],
        "processing_ms": 4210
    })
}

/// In-memory store mirroring the service crate's adapter; newest last.
#[derive(Default)]
pub(super) struct MemoryStore {
    analyses: Mutex<Vec<StoredAnalysis>>,
}

impl AnalysisStore for MemoryStore {
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

pub(super) struct ConflictStore;

impl AnalysisStore for ConflictStore {
    fn insert(&self, _analysis: StoredAnalysis) -> Result<StoredAnalysis, StoreError> {
        Err(StoreError::Conflict)
    }

    fn fetch(&self, _id: &AnalysisId) -> Result<Option<StoredAnalysis>, StoreError> {
        Ok(None)
    }

    fn latest(&self) -> Result<Option<StoredAnalysis>, StoreError> {
        Ok(None)
    }
}

pub(super) struct UnavailableStore;

impl AnalysisStore for UnavailableStore {
    fn insert(&self, _analysis: StoredAnalysis) -> Result<StoredAnalysis, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &AnalysisId) -> Result<Option<StoredAnalysis>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn latest(&self) -> Result<Option<StoredAnalysis>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

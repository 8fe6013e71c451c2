use serde::Serialize;

use super::super::catalog::RequiredDocument;
use super::super::domain::{DocRole, DocStatus, RuleVerdict};

/// Qualitative bands for the readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    Baseline,
    Poor,
    Partial,
    Good,
    Unreadable,
}

impl ReadinessLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Baseline => "Hazırlık Başlangıç Seviyesinde",
            Self::Poor => "Eksikler Var",
            Self::Partial => "Belgeler Büyük Ölçüde Hazır",
            Self::Good => "Başvuruya Oldukça Yakınsın",
            Self::Unreadable => "Belgeler yüklendi ama okunamadı",
        }
    }
}

/// One row of the score drill-down, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdownEntry {
    pub document: RequiredDocument,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocStatus>,
    pub penalty: u8,
}

/// Presentation tone for an uploaded checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistTone {
    Affirmative,
    Caution,
    Blocking,
}

impl ChecklistTone {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Affirmative => "Uygun",
            Self::Caution => "Kontrol öneriliyor",
            Self::Blocking => "Kritik sorun",
        }
    }
}

impl From<DocStatus> for ChecklistTone {
    fn from(status: DocStatus) -> Self {
        match status {
            DocStatus::Ok => Self::Affirmative,
            DocStatus::Warning => Self::Caution,
            DocStatus::Critical => Self::Blocking,
        }
    }
}

/// Serialized checklist row for the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistRowView {
    pub key: &'static str,
    pub label: &'static str,
    pub uploaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<ChecklistTone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_label: Option<&'static str>,
    pub focused: bool,
}

/// Display join of one verdict for per-file cards. Unrecognized and
/// irrelevant uploads render with their sentinel labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentVerdictView {
    pub filename: String,
    pub category: String,
    pub category_label: String,
    pub role: DocRole,
    pub pages_processed: u32,
    pub status: DocStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
}

impl DocumentVerdictView {
    pub fn from_verdict(verdict: &RuleVerdict) -> Self {
        Self {
            filename: verdict.file.filename.clone(),
            category: verdict.category.as_key().to_string(),
            category_label: verdict.category.display_label().to_string(),
            role: verdict.role,
            pages_processed: verdict.pages_processed,
            status: verdict.status,
            status_label: verdict.status.label(),
            findings: verdict.findings.clone(),
            recommended_actions: verdict.actions.clone(),
        }
    }
}

/// Everything the result screen renders for one analysis snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecheckReportView {
    pub overall_status: DocStatus,
    pub score: u8,
    pub base_score: u8,
    pub total_penalty: u16,
    pub breakdown: Vec<ScoreBreakdownEntry>,
    pub readiness_level: ReadinessLevel,
    pub readiness_label: &'static str,
    pub checklist: Vec<ChecklistRowView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cross_document_findings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub single_document_findings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
    pub documents: Vec<DocumentVerdictView>,
    pub verdict_count: usize,
    pub processing_duration_ms: u64,
    pub advisory_notice: &'static str,
}

use std::collections::BTreeMap;

use serde::Deserialize;

use super::super::domain::{AnalysisReport, DocCategory, DocRole, DocStatus, FileMeta, RuleVerdict};

/// Wire shape of the analysis service response. Field names follow the
/// service contract, not the domain model.
#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeResponse {
    status: DocStatus,
    #[serde(default)]
    reasons: Vec<String>,
    #[serde(default)]
    actions: Vec<String>,
    file_results: Vec<FileResultRow>,
    #[serde(default)]
    processing_ms: u64,
}

impl AnalyzeResponse {
    pub(crate) fn is_empty(&self) -> bool {
        self.file_results.is_empty()
    }

    pub(crate) fn into_report(self) -> AnalysisReport {
        let verdicts = self
            .file_results
            .into_iter()
            .map(FileResultRow::into_verdict)
            .collect();

        AnalysisReport {
            overall_status: self.status,
            findings: self.reasons,
            actions: self.actions,
            verdicts,
            processing_duration_ms: self.processing_ms,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FileResultRow {
    file: FileMetaRow,
    doc_type: DocCategory,
    doc_role: DocRole,
    #[serde(default)]
    pages_processed: u32,
    #[serde(default)]
    fields: BTreeMap<String, serde_json::Value>,
    rule: RuleRow,
}

impl FileResultRow {
    fn into_verdict(self) -> RuleVerdict {
        RuleVerdict {
            file: FileMeta {
                filename: self.file.filename,
                content_type: self.file.content_type,
                size_mb: self.file.size_mb,
            },
            category: self.doc_type,
            role: self.doc_role,
            pages_processed: self.pages_processed,
            extracted_fields: self.fields,
            status: self.rule.status,
            findings: self.rule.reasons,
            actions: self.rule.actions,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FileMetaRow {
    filename: String,
    content_type: String,
    #[serde(default)]
    size_mb: f64,
}

#[derive(Debug, Deserialize)]
struct RuleRow {
    status: DocStatus,
    #[serde(default)]
    reasons: Vec<String>,
    #[serde(default)]
    actions: Vec<String>,
}

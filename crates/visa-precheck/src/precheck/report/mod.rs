mod checklist;
mod findings;
mod insights;
mod score;
pub mod views;

use super::catalog::RequiredDocument;
use super::domain::{AnalysisReport, DocRole, RuleVerdict};
use views::{DocumentVerdictView, PrecheckReportView};

pub use checklist::{reconcile_checklist, ChecklistEntry, ChecklistState};
pub use findings::{split_findings, FindingsSplit, CROSS_MARKER};
pub use insights::{assess_readiness, assess_readiness_with_uploads, ReadinessAssessment};
pub use score::{score_documents, DocumentScore};

/// Disclaimer attached to every derived view; the score is advisory only and
/// never a consular decision.
pub const ADVISORY_NOTICE: &str = "Bu skor yalnızca teknik ön kontrol ve belge tutarlılığına dayanır. Nihai değerlendirme resmi mercilere aittir.";

/// First core-required verdict for a catalog entry, in input order. Duplicate
/// categories resolve to the earliest occurrence, never the best status.
pub(crate) fn canonical_core_verdict(
    verdicts: &[RuleVerdict],
    document: RequiredDocument,
) -> Option<&RuleVerdict> {
    verdicts
        .iter()
        .find(|verdict| verdict.role == DocRole::CoreRequired && verdict.category.matches(document))
}

/// Fan one analysis snapshot out to every view the result screen renders:
/// score with breakdown, readiness band, reconciled checklist, findings
/// split, and per-document cards. Pure; no component consumes another's
/// output except the classifier reading the computed score.
pub fn derive_report(report: &AnalysisReport, focus: Option<&str>) -> PrecheckReportView {
    let score = score_documents(&report.verdicts);
    let readiness = assess_readiness(score.score, &report.verdicts);
    let checklist = reconcile_checklist(&report.verdicts, focus)
        .iter()
        .map(ChecklistEntry::to_view)
        .collect();
    let findings = split_findings(&report.findings);
    let documents = report
        .verdicts
        .iter()
        .map(DocumentVerdictView::from_verdict)
        .collect();

    PrecheckReportView {
        overall_status: report.overall_status,
        score: score.score,
        base_score: score.base_score,
        total_penalty: score.total_penalty,
        breakdown: score.breakdown,
        readiness_level: readiness.level,
        readiness_label: readiness.level.label(),
        checklist,
        cross_document_findings: findings.cross_document,
        single_document_findings: findings.single_document,
        recommended_actions: report.actions.clone(),
        documents,
        verdict_count: report.verdicts.len(),
        processing_duration_ms: report.processing_duration_ms,
        advisory_notice: ADVISORY_NOTICE,
    }
}

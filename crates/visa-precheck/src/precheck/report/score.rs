use serde::Serialize;

use super::super::catalog::RequiredDocument;
use super::super::domain::{DocStatus, RuleVerdict};
use super::canonical_core_verdict;
use super::views::ScoreBreakdownEntry;

/// Outcome of the readiness scoring pass. The breakdown stays in catalog
/// order for UI drill-down, not severity order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentScore {
    pub score: u8,
    pub base_score: u8,
    pub total_penalty: u16,
    pub breakdown: Vec<ScoreBreakdownEntry>,
}

// An absent required document weighs zero, below a critical one.
const fn base_value(status: Option<DocStatus>) -> u16 {
    match status {
        None => 0,
        Some(DocStatus::Critical) => 20,
        Some(DocStatus::Warning) => 70,
        Some(DocStatus::Ok) => 100,
    }
}

// Deduction layered on top of the base-value gap, keyed off the same status.
const fn penalty_value(status: Option<DocStatus>) -> u8 {
    match status {
        Some(DocStatus::Critical) => 20,
        Some(DocStatus::Warning) => 10,
        _ => 0,
    }
}

/// Reduce the verdicts to a bounded score over the required-document catalog.
/// Only presence and `status` matter; findings and actions never move the
/// number.
pub fn score_documents(verdicts: &[RuleVerdict]) -> DocumentScore {
    let catalog = RequiredDocument::ordered();

    let mut base_total: u16 = 0;
    let mut breakdown = Vec::with_capacity(catalog.len());

    for document in catalog {
        let status = canonical_core_verdict(verdicts, document).map(|verdict| verdict.status);
        base_total += base_value(status);
        breakdown.push(ScoreBreakdownEntry {
            document,
            label: document.label(),
            status,
            penalty: penalty_value(status),
        });
    }

    let base_score = (base_total as f32 / catalog.len() as f32).round() as u8;
    let total_penalty: u16 = breakdown.iter().map(|entry| entry.penalty as u16).sum();
    let score = (base_score as i16 - total_penalty as i16).clamp(0, 100) as u8;

    DocumentScore {
        score,
        base_score,
        total_penalty,
        breakdown,
    }
}

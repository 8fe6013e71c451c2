use super::super::catalog::RequiredDocument;
use super::super::domain::RuleVerdict;
use super::views::ReadinessLevel;

/// Qualitative readiness derived from the numeric score plus the category
/// recognition signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessAssessment {
    pub level: ReadinessLevel,
    pub recognized_required: usize,
}

pub fn assess_readiness(score: u8, verdicts: &[RuleVerdict]) -> ReadinessAssessment {
    assess_readiness_with_uploads(score, verdicts, !verdicts.is_empty())
}

/// `any_file_uploaded` exists for callers whose upstream can reject every raw
/// file before a verdict is produced: a zero score alone cannot distinguish
/// "nothing uploaded" from "uploaded but nothing recognizable".
pub fn assess_readiness_with_uploads(
    score: u8,
    verdicts: &[RuleVerdict],
    any_file_uploaded: bool,
) -> ReadinessAssessment {
    // Match is by category, not role: a required category carried by a
    // mis-roled verdict still counts as recognized.
    let recognized_required = RequiredDocument::ordered()
        .into_iter()
        .filter(|document| {
            verdicts
                .iter()
                .any(|verdict| verdict.category.matches(*document))
        })
        .count();

    // Recognition is checked before any threshold so an unreadable batch is
    // never reported as the baseline level.
    let level = if any_file_uploaded && recognized_required == 0 {
        ReadinessLevel::Unreadable
    } else if score >= 85 {
        ReadinessLevel::Good
    } else if score >= 60 {
        ReadinessLevel::Partial
    } else if score > 0 {
        ReadinessLevel::Poor
    } else {
        ReadinessLevel::Baseline
    };

    ReadinessAssessment {
        level,
        recognized_required,
    }
}

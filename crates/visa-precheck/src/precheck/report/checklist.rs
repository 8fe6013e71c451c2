use super::super::catalog::RequiredDocument;
use super::super::domain::{DocStatus, RuleVerdict};
use super::canonical_core_verdict;
use super::views::{ChecklistRowView, ChecklistTone};

/// Reconciled presence of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistState {
    Missing,
    Uploaded { status: DocStatus },
}

/// One row of the required-document checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub document: RequiredDocument,
    pub state: ChecklistState,
    pub focused: bool,
}

impl ChecklistEntry {
    pub fn to_view(&self) -> ChecklistRowView {
        let status = match self.state {
            ChecklistState::Missing => None,
            ChecklistState::Uploaded { status } => Some(status),
        };
        let tone = status.map(ChecklistTone::from);

        ChecklistRowView {
            key: self.document.key(),
            label: self.document.label(),
            uploaded: status.is_some(),
            status,
            tone,
            status_label: tone.map(ChecklistTone::label),
            focused: self.focused,
        }
    }
}

/// Join the required-document catalog against the uploaded verdicts, in
/// catalog order. A row is focusable whether or not its document was
/// uploaded: absent rows render a call-to-action, present rows a
/// jump-to-detail affordance. No scoring happens here.
pub fn reconcile_checklist(verdicts: &[RuleVerdict], focus: Option<&str>) -> Vec<ChecklistEntry> {
    RequiredDocument::ordered()
        .into_iter()
        .map(|document| {
            let state = match canonical_core_verdict(verdicts, document) {
                Some(verdict) => ChecklistState::Uploaded {
                    status: verdict.status,
                },
                None => ChecklistState::Missing,
            };

            ChecklistEntry {
                document,
                state,
                focused: focus == Some(document.key()),
            }
        })
        .collect()
}

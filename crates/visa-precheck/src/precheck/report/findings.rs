use serde::Serialize;

/// Marker the analysis service prepends to findings that span two or more
/// documents. The trailing space is part of the marker.
pub const CROSS_MARKER: &str = "[CROSS] ";

/// Findings partitioned by scope; input order is preserved within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FindingsSplit {
    pub cross_document: Vec<String>,
    pub single_document: Vec<String>,
}

/// Purely syntactic split on the reserved marker. The marker is stripped from
/// surfaced cross-document text; finding content is never interpreted.
pub fn split_findings(findings: &[String]) -> FindingsSplit {
    let mut split = FindingsSplit::default();

    for finding in findings {
        match finding.strip_prefix(CROSS_MARKER) {
            Some(text) => split.cross_document.push(text.to_string()),
            None => split.single_document.push(finding.clone()),
        }
    }

    split
}

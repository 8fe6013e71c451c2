use crate::precheck::report::{split_findings, CROSS_MARKER};

fn owned(findings: &[&str]) -> Vec<String> {
    findings.iter().map(|finding| finding.to_string()).collect()
}

#[test]
fn cross_marker_is_stripped_from_surfaced_text() {
    let findings = owned(&[
        "[CROSS] Pasaport geçerlilik tarihi ile uçuş tarihi uyuşmuyor",
        "Banka dökümünde IBAN bilgisi tespit edilemedi.",
    ]);

    let split = split_findings(&findings);

    assert_eq!(
        split.cross_document,
        vec!["Pasaport geçerlilik tarihi ile uçuş tarihi uyuşmuyor".to_string()]
    );
    assert_eq!(
        split.single_document,
        vec!["Banka dökümünde IBAN bilgisi tespit edilemedi.".to_string()]
    );
}

#[test]
fn order_is_preserved_within_each_group() {
    let findings = owned(&[
        "first single",
        "[CROSS] first cross",
        "second single",
        "[CROSS] second cross",
    ]);

    let split = split_findings(&findings);

    assert_eq!(split.cross_document, owned(&["first cross", "second cross"]));
    assert_eq!(split.single_document, owned(&["first single", "second single"]));
}

#[test]
fn marker_requires_the_trailing_space() {
    let findings = owned(&["[CROSS]tight", "[cross] lowercase", "mid [CROSS] marker"]);

    let split = split_findings(&findings);

    assert!(split.cross_document.is_empty());
    assert_eq!(split.single_document.len(), 3);
}

#[test]
fn empty_input_splits_to_empty_groups() {
    let split = split_findings(&[]);
    assert!(split.cross_document.is_empty());
    assert!(split.single_document.is_empty());
}

#[test]
fn split_is_idempotent() {
    let findings = owned(&["[CROSS] tarih uyumsuzluğu", "tekil bulgu"]);
    assert_eq!(split_findings(&findings), split_findings(&findings));
}

#[test]
fn marker_constant_keeps_its_shape() {
    assert!(CROSS_MARKER.starts_with("[CROSS]"));
    assert!(CROSS_MARKER.ends_with(' '));
}

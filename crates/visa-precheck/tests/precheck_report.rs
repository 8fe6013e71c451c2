use serde_json::json;
use visa_precheck::precheck::{
    derive_report, AnalysisIntake, ChecklistTone, DocRole, DocStatus, ReadinessLevel,
    RequiredDocument, ADVISORY_NOTICE,
};

fn analysis_payload() -> serde_json::Value {
    json!({
        "status": "critical",
        "reasons": [
            "Pasaport süresi dolmuş görünüyor.",
            "Banka dökümünde IBAN bilgisi tespit edilemedi.",
            "[CROSS] Konaklama tarihleri uçuş tarihlerini tam kapsamıyor.",
            "[CROSS] Seyahat sigortası tarihleri uçuş tarihlerini yeterli tamponla kapsamıyor."
        ],
        "actions": [
            "Geçerli pasaport ile başvuru yapmalısın.",
            "IBAN bilgisinin göründüğü sayfayı ekle."
        ],
        "file_results": [
            {
                "file": {"filename": "pasaport.pdf", "content_type": "application/pdf", "size_mb": 2.4},
                "doc_type": "passport",
                "doc_role": "CORE_REQUIRED",
                "pages_processed": 1,
                "fields": {"has_mrz_signal": true, "expiry_candidate": "2025-11-02"},
                "rule": {
                    "status": "critical",
                    "reasons": ["Pasaport süresi dolmuş görünüyor."],
                    "actions": ["Geçerli pasaport ile başvuru yapmalısın."]
                }
            },
            {
                "file": {"filename": "ekstre.pdf", "content_type": "application/pdf", "size_mb": 1.1},
                "doc_type": "bank_statement",
                "doc_role": "CORE_REQUIRED",
                "pages_processed": 4,
                "fields": {"has_iban_term": false},
                "rule": {
                    "status": "warning",
                    "reasons": ["Banka dökümünde IBAN bilgisi tespit edilemedi."],
                    "actions": ["IBAN bilgisinin göründüğü sayfayı ekle."]
                }
            },
            {
                "file": {"filename": "ucus.pdf", "content_type": "application/pdf", "size_mb": 0.4},
                "doc_type": "flight_reservation",
                "doc_role": "CORE_REQUIRED",
                "pages_processed": 1,
                "rule": {"status": "ok", "reasons": [], "actions": []}
            },
            {
                "file": {"filename": "davetiye.pdf", "content_type": "application/pdf", "size_mb": 0.2},
                "doc_type": "invitation_letter",
                "doc_role": "SUPPORTING_OPTIONAL",
                "pages_processed": 1,
                "rule": {"status": "ok", "reasons": [], "actions": []}
            },
            {
                "file": {"filename": "tarama.jpg", "content_type": "image/jpeg", "size_mb": 3.0},
                "doc_type": "unknown",
                "doc_role": "IRRELEVANT",
                "pages_processed": 1,
                "rule": {"status": "ok", "reasons": [], "actions": []}
            }
        ],
        "processing_ms": 6180
    })
}

#[test]
fn intake_and_derivation_produce_the_result_screen_view() {
    let report = AnalysisIntake::from_value(analysis_payload()).expect("payload parses");
    let view = derive_report(&report, Some("travel_insurance"));

    // passport critical (20) + bank warning (70) + flight ok (100), three
    // absent: base (20+70+100)/6 = 31.67 -> 32, penalties 20 + 10.
    assert_eq!(view.base_score, 32);
    assert_eq!(view.total_penalty, 30);
    assert_eq!(view.score, 2);
    assert_eq!(view.readiness_level, ReadinessLevel::Poor);
    assert_eq!(view.overall_status, DocStatus::Critical);

    assert_eq!(view.checklist.len(), 6);
    let insurance = view
        .checklist
        .iter()
        .find(|row| row.key == RequiredDocument::TravelInsurance.key())
        .expect("insurance row present");
    assert!(insurance.focused);
    assert!(!insurance.uploaded);

    let passport = &view.checklist[0];
    assert!(passport.uploaded);
    assert_eq!(passport.tone, Some(ChecklistTone::Blocking));

    assert_eq!(view.cross_document_findings.len(), 2);
    assert_eq!(
        view.cross_document_findings[0],
        "Konaklama tarihleri uçuş tarihlerini tam kapsamıyor."
    );
    assert_eq!(view.single_document_findings.len(), 2);
    assert_eq!(view.recommended_actions.len(), 2);

    assert_eq!(view.documents.len(), 5);
    let unknown = view
        .documents
        .iter()
        .find(|doc| doc.category == "unknown")
        .expect("unclassified upload still renders");
    assert_eq!(unknown.category_label, "Tanınmayan Belge");
    assert_eq!(unknown.role, DocRole::Irrelevant);

    let supporting = view
        .documents
        .iter()
        .find(|doc| doc.category == "invitation_letter")
        .expect("supporting upload still renders");
    assert_eq!(supporting.category_label, "invitation_letter");

    assert_eq!(view.verdict_count, 5);
    assert_eq!(view.processing_duration_ms, 6180);
    assert_eq!(view.advisory_notice, ADVISORY_NOTICE);
}

#[test]
fn derivation_is_deterministic_for_the_same_snapshot() {
    let report = AnalysisIntake::from_value(analysis_payload()).expect("payload parses");

    let first = derive_report(&report, Some("passport"));
    let second = derive_report(&report, Some("passport"));

    assert_eq!(first, second);
}

#[test]
fn supporting_documents_do_not_move_the_score() {
    let mut payload = analysis_payload();
    let file_results = payload["file_results"]
        .as_array_mut()
        .expect("file_results array");
    file_results.retain(|row| row["doc_role"] == "SUPPORTING_OPTIONAL");

    let report = AnalysisIntake::from_value(payload).expect("payload parses");
    let view = derive_report(&report, None);

    assert_eq!(view.score, 0);
    assert_eq!(view.base_score, 0);
    // The supporting letter is not a required category, so nothing was
    // recognized and the batch reads as unreadable.
    assert_eq!(view.readiness_level, ReadinessLevel::Unreadable);
}

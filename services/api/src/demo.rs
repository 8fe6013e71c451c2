use crate::infra::InMemoryAnalysisStore;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use visa_precheck::error::AppError;
use visa_precheck::precheck::{derive_report, AnalysisIntake, PrecheckReportView, PrecheckService};

#[derive(Args, Debug)]
pub(crate) struct PrecheckReportArgs {
    /// Path to a saved analysis service response (JSON)
    #[arg(long)]
    pub(crate) analysis_json: PathBuf,
    /// Required-document key to highlight in the checklist
    #[arg(long)]
    pub(crate) focus: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Analysis response to use instead of the built-in fixture
    #[arg(long)]
    pub(crate) analysis_json: Option<PathBuf>,
    /// Required-document key to highlight in the checklist
    #[arg(long)]
    pub(crate) focus: Option<String>,
}

pub(crate) fn run_precheck_report(args: PrecheckReportArgs) -> Result<(), AppError> {
    let PrecheckReportArgs {
        analysis_json,
        focus,
    } = args;

    let report = AnalysisIntake::from_path(analysis_json)?;
    let view = derive_report(&report, focus.as_deref());
    render_precheck_report(&view);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        analysis_json,
        focus,
    } = args;

    println!("Visa pre-check demo");

    let report = match analysis_json {
        Some(path) => {
            println!("Data source: saved analysis response");
            AnalysisIntake::from_path(path)?
        }
        None => {
            println!("Data source: built-in fixture (no analysis file provided)");
            AnalysisIntake::from_value(sample_analysis())?
        }
    };

    let store = Arc::new(InMemoryAnalysisStore::default());
    let service = PrecheckService::new(store);

    let stored = service.submit_report(report)?;
    println!(
        "Analysis stored as {} ({} document(s), received {})",
        stored.id.0,
        stored.report.verdicts.len(),
        stored.received_at
    );

    let view = service.report(&stored.id, focus.as_deref())?;
    render_precheck_report(&view);

    Ok(())
}

fn render_precheck_report(view: &PrecheckReportView) {
    println!("\nReadiness score: %{}", view.score);
    println!(
        "{} (base {}, penalties -{})",
        view.readiness_label, view.base_score, view.total_penalty
    );

    println!("\nScore breakdown");
    for entry in &view.breakdown {
        match entry.status {
            Some(status) => println!(
                "- {}: {} (-{} puan)",
                entry.label,
                status.label(),
                entry.penalty
            ),
            None => println!("- {}: belge yüklenmedi", entry.label),
        }
    }

    println!("\nRequired documents");
    for row in &view.checklist {
        let state = row.status_label.unwrap_or("Yüklenmedi");
        let marker = if row.focused { "  <- focus" } else { "" };
        println!("- {}: {}{}", row.label, state, marker);
    }

    if !view.cross_document_findings.is_empty() {
        println!("\nCross-document consistency");
        for finding in &view.cross_document_findings {
            println!("- {finding}");
        }
    }

    if !view.single_document_findings.is_empty() {
        println!("\nDocument findings");
        for finding in &view.single_document_findings {
            println!("- {finding}");
        }
    }

    if !view.recommended_actions.is_empty() {
        println!("\nRecommended actions");
        for action in &view.recommended_actions {
            println!("- {action}");
        }
    }

    println!("\nProcessed documents");
    for document in &view.documents {
        println!(
            "- {} | {} | {} | {}",
            document.filename,
            document.category_label,
            document.role.label(),
            document.status_label
        );
    }

    println!(
        "\nAnalysis took {} ms over {} document(s).",
        view.processing_duration_ms, view.verdict_count
    );
    println!("{}", view.advisory_notice);
}

fn sample_analysis() -> serde_json::Value {
    json!({
        "status": "warning",
        "reasons": [
            "Banka dökümü 41 gün önce tarihli görünüyor; güncel olmayabilir.",
            "Sigortada 30.000 EUR kapsam sinyali bulunamadı (OCR kaçırmış olabilir).",
            "[CROSS] Konaklama tarihleri uçuş tarihlerini tam kapsamıyor."
        ],
        "actions": [
            "Son 30 gün içinde alınmış banka dökümü yükle.",
            "Kapsam tutarının göründüğü bölümü net şekilde yükle.",
            "Konaklama belgesinin gidiş-dönüş tarihlerini kapsadığından emin ol."
        ],
        "file_results": [
            {
                "file": {"filename": "pasaport.pdf", "content_type": "application/pdf", "size_mb": 2.3},
                "doc_type": "passport",
                "doc_role": "CORE_REQUIRED",
                "pages_processed": 1,
                "fields": {"has_mrz_signal": true, "expiry_candidate": "2031-06-14"},
                "rule": {"status": "ok", "reasons": [], "actions": []}
            },
            {
                "file": {"filename": "hesap-ozeti.pdf", "content_type": "application/pdf", "size_mb": 1.6},
                "doc_type": "bank_statement",
                "doc_role": "CORE_REQUIRED",
                "pages_processed": 5,
                "fields": {"has_iban_term": true, "latest_date": "2025-05-02"},
                "rule": {
                    "status": "warning",
                    "reasons": ["Banka dökümü 41 gün önce tarihli görünüyor; güncel olmayabilir."],
                    "actions": ["Son 30 gün içinde alınmış banka dökümü yükle."]
                }
            },
            {
                "file": {"filename": "police.pdf", "content_type": "application/pdf", "size_mb": 0.7},
                "doc_type": "travel_insurance",
                "doc_role": "CORE_REQUIRED",
                "pages_processed": 2,
                "fields": {"has_schengen_term": true, "has_coverage_30k": false},
                "rule": {
                    "status": "warning",
                    "reasons": ["Sigortada 30.000 EUR kapsam sinyali bulunamadı (OCR kaçırmış olabilir)."],
                    "actions": ["Kapsam tutarının göründüğü bölümü net şekilde yükle."]
                }
            },
            {
                "file": {"filename": "ucus-rezervasyon.pdf", "content_type": "application/pdf", "size_mb": 0.3},
                "doc_type": "flight_reservation",
                "doc_role": "CORE_REQUIRED",
                "pages_processed": 1,
                "rule": {"status": "ok", "reasons": [], "actions": []}
            },
            {
                "file": {"filename": "maas-bordrosu.pdf", "content_type": "application/pdf", "size_mb": 0.2},
                "doc_type": "salary_slip",
                "doc_role": "SUPPORTING_OPTIONAL",
                "pages_processed": 1,
                "rule": {
                    "status": "ok",
                    "reasons": ["Yüklenen belge destekleyici niteliktedir; zorunlu belge listesinde olmayabilir."],
                    "actions": []
                }
            },
            {
                "file": {"filename": "foto.jpg", "content_type": "image/jpeg", "size_mb": 2.8},
                "doc_type": "unknown",
                "doc_role": "IRRELEVANT",
                "pages_processed": 1,
                "rule": {
                    "status": "ok",
                    "reasons": ["Yüklenen belge, bu uygulamanın hedeflediği Schengen ön kontrol belgeleri kapsamında görünmüyor."],
                    "actions": []
                }
            }
        ],
        "processing_ms": 7430
    })
}

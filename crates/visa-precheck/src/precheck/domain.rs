use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::RequiredDocument;

/// Severity assigned by the upstream rule engine, either to one document or
/// to the whole report. Opaque to this crate: it is never re-derived from the
/// findings it accompanies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocStatus {
    Ok,
    Warning,
    Critical,
}

impl DocStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DocStatus::Ok => "Uygun",
            DocStatus::Warning => "Dikkat",
            DocStatus::Critical => "Sorun",
        }
    }
}

/// Whether a document participates in required-document aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocRole {
    CoreRequired,
    SupportingOptional,
    Irrelevant,
}

impl DocRole {
    pub const fn label(self) -> &'static str {
        match self {
            DocRole::CoreRequired => "CORE_REQUIRED",
            DocRole::SupportingOptional => "SUPPORTING_OPTIONAL",
            DocRole::Irrelevant => "IRRELEVANT",
        }
    }
}

pub(crate) const UNCLASSIFIED_KEY: &str = "unknown";
pub(crate) const IRRELEVANT_KEY: &str = "irrelevant_document";

/// Category assigned by the upstream classifier. The wire vocabulary reserves
/// two sentinel strings; they get their own variants so handling stays
/// exhaustive instead of leaking through the key space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocCategory {
    Known(String),
    Unclassified,
    Irrelevant,
}

impl DocCategory {
    pub fn from_key(raw: &str) -> Self {
        match raw {
            UNCLASSIFIED_KEY => DocCategory::Unclassified,
            IRRELEVANT_KEY => DocCategory::Irrelevant,
            other => DocCategory::Known(other.to_string()),
        }
    }

    pub fn as_key(&self) -> &str {
        match self {
            DocCategory::Known(key) => key,
            DocCategory::Unclassified => UNCLASSIFIED_KEY,
            DocCategory::Irrelevant => IRRELEVANT_KEY,
        }
    }

    /// Display label for per-file cards. Unrecognized and irrelevant uploads
    /// still render; known categories outside the required catalog fall back
    /// to their raw key.
    pub fn display_label(&self) -> &str {
        match self {
            DocCategory::Known(key) => RequiredDocument::from_key(key)
                .map(RequiredDocument::label)
                .unwrap_or(key),
            DocCategory::Unclassified => "Tanınmayan Belge",
            DocCategory::Irrelevant => "İlgisiz Belge",
        }
    }

    pub fn matches(&self, document: RequiredDocument) -> bool {
        matches!(self, DocCategory::Known(key) if key.as_str() == document.key())
    }
}

impl Serialize for DocCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_key())
    }
}

impl<'de> Deserialize<'de> for DocCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(DocCategory::from_key(&raw))
    }
}

/// Upload metadata echoed back by the analysis service, display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    pub filename: String,
    pub content_type: String,
    pub size_mb: f64,
}

/// One evaluated document as produced by the external rule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleVerdict {
    pub file: FileMeta,
    pub category: DocCategory,
    pub role: DocRole,
    pub pages_processed: u32,
    pub extracted_fields: BTreeMap<String, serde_json::Value>,
    pub status: DocStatus,
    pub findings: Vec<String>,
    pub actions: Vec<String>,
}

/// Immutable snapshot of one analysis run. Verdict order is receipt order;
/// duplicate categories resolve first-occurrence-wins everywhere downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_status: DocStatus,
    pub findings: Vec<String>,
    pub actions: Vec<String>,
    pub verdicts: Vec<RuleVerdict>,
    pub processing_duration_ms: u64,
}

mod parser;

use std::io::Read;
use std::path::Path;

use super::domain::AnalysisReport;

#[derive(Debug)]
pub enum AnalysisIntakeError {
    Io(std::io::Error),
    Json(serde_json::Error),
    EmptyReport,
}

impl std::fmt::Display for AnalysisIntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisIntakeError::Io(err) => {
                write!(f, "failed to read analysis payload: {}", err)
            }
            AnalysisIntakeError::Json(err) => write!(f, "invalid analysis JSON: {}", err),
            AnalysisIntakeError::EmptyReport => {
                write!(f, "analysis payload contains no document results")
            }
        }
    }
}

impl std::error::Error for AnalysisIntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisIntakeError::Io(err) => Some(err),
            AnalysisIntakeError::Json(err) => Some(err),
            AnalysisIntakeError::EmptyReport => None,
        }
    }
}

impl From<std::io::Error> for AnalysisIntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for AnalysisIntakeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Boundary turning the analysis service's JSON response into a domain
/// report. A report with zero verdicts never reaches the derivation core.
pub struct AnalysisIntake;

impl AnalysisIntake {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnalysisReport, AnalysisIntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<AnalysisReport, AnalysisIntakeError> {
        let wire: parser::AnalyzeResponse = serde_json::from_reader(reader)?;
        Self::from_wire(wire)
    }

    pub fn from_value(value: serde_json::Value) -> Result<AnalysisReport, AnalysisIntakeError> {
        let wire: parser::AnalyzeResponse = serde_json::from_value(value)?;
        Self::from_wire(wire)
    }

    fn from_wire(wire: parser::AnalyzeResponse) -> Result<AnalysisReport, AnalysisIntakeError> {
        if wire.is_empty() {
            return Err(AnalysisIntakeError::EmptyReport);
        }

        Ok(wire.into_report())
    }
}

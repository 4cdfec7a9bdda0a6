use std::path::Path;

use crate::error::ReportError;
use crate::ort::document::OrtDocument;
use crate::ort::source::{OrtResults, ResultKind};

/// A parsed results document together with the raw notice text.
#[derive(Debug)]
pub struct LoadedResults {
    pub document: OrtDocument,
    pub notice: String,
    pub kind: ResultKind,
}

/// Read the preferred results document and the notice file of one ecosystem.
pub fn load(results: &OrtResults) -> Result<LoadedResults, ReportError> {
    let kind = results.result_kind();
    let document = read_document(results.result_file())?;
    let notice = read_text(&results.notice_file)?;

    Ok(LoadedResults {
        document,
        notice,
        kind,
    })
}

fn read_document(path: &Path) -> Result<OrtDocument, ReportError> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|source| ReportError::MalformedDocument {
        path: path.to_path_buf(),
        source,
    })
}

fn read_text(path: &Path) -> Result<String, ReportError> {
    std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))
}

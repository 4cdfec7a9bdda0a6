use serde_json::Value;

use crate::error::ReportError;
use crate::license::declared::{is_blank, DeclaredLicense};
use crate::models::Extracted;
use crate::ort::document::{Package, ProjectScanResults, ScannerRun};
use crate::ort::loader::LoadedResults;
use crate::ort::source::ResultKind;

/// Source hint used when a finding carries no provenance.
pub const SOURCE_PLACEHOLDER: &str = "source-code";

/// Turn one ecosystem's results into records, in document order.
///
/// Declared licenses come first (package by package, value by value), then
/// scanner findings when the document came from a deep scan.
pub fn extract(language: &str, loaded: &LoadedResults) -> Result<Vec<Extracted>, ReportError> {
    let mut out = Vec::new();

    for package in &loaded.document.analyzer.result.packages {
        extract_declared(language, package, &loaded.notice, &mut out).map_err(|e| {
            tracing::error!(
                package = %package.id,
                language,
                declared = ?package.declared_licenses_processed,
                "failed to process package"
            );
            e
        })?;
    }

    if loaded.kind == ResultKind::Scan {
        if let Some(scanner) = &loaded.document.scanner {
            tracing::info!("processing detected licenses from {} scan results", language);
            extract_detected(language, scanner, &mut out)?;
        }
    }

    Ok(out)
}

/// Third `:`-separated segment of an ORT id (`PyPI::pathspec:0.12.1` -> `pathspec`).
pub fn short_name<'a>(language: &str, package_id: &'a str) -> Result<&'a str, ReportError> {
    package_id
        .split(':')
        .nth(2)
        .ok_or_else(|| ReportError::MalformedPackage {
            ecosystem: language.to_string(),
            package: package_id.to_string(),
            reason: "id has fewer than three ':'-separated segments".to_string(),
        })
}

fn extract_declared(
    language: &str,
    package: &Package,
    notice: &str,
    out: &mut Vec<Extracted>,
) -> Result<(), ReportError> {
    let name = short_name(language, &package.id)?;
    if !notice.contains(name) {
        tracing::debug!(package = %package.id, "not in notice file, skipping");
        out.push(Extracted::skipped(&package.id, language));
        return Ok(());
    }

    let declared = match &package.declared_licenses_processed {
        None | Some(Value::Null) => {
            tracing::debug!(package = %package.id, "no declared licenses");
            return Ok(());
        }
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(ReportError::MalformedPackage {
                ecosystem: language.to_string(),
                package: package.id.clone(),
                reason: format!("declared_licenses_processed is not a map: {}", other),
            })
        }
    };

    for value in declared.values() {
        let licenses = DeclaredLicense::from_value(value)
            .map_err(|shape| ReportError::AmbiguousLicense {
                ecosystem: language.to_string(),
                package: package.id.clone(),
                value: shape.0.to_string(),
            })?
            .map(DeclaredLicense::into_expressions)
            .unwrap_or_default();

        for license in licenses {
            out.push(Extracted::licensed(&package.id, language, license));
        }
    }

    Ok(())
}

fn extract_detected(
    language: &str,
    scanner: &ScannerRun,
    out: &mut Vec<Extracted>,
) -> Result<(), ReportError> {
    for (project_id, project) in &scanner.results {
        let project = decode_project(language, project_id, project)?;

        for scan_result in &project.scan_results {
            let fallback = scan_result.provenance.as_ref().and_then(|p| p.hint());

            for finding in &scan_result.license_findings {
                let Some(license) = finding.license.as_deref().filter(|l| !is_blank(l)) else {
                    continue;
                };
                let hint = finding
                    .provenance
                    .as_ref()
                    .and_then(|p| p.hint())
                    .or(fallback)
                    .unwrap_or(SOURCE_PLACEHOLDER);

                out.push(Extracted::licensed(
                    format!("Source::{}::{}", project_id, hint),
                    language,
                    license,
                ));
                tracing::info!(project = %project_id, language, "detected license {}", license);
            }
        }
    }

    Ok(())
}

fn decode_project(
    language: &str,
    project_id: &str,
    value: &Value,
) -> Result<ProjectScanResults, ReportError> {
    serde_json::from_value(value.clone()).map_err(|e| {
        tracing::error!(project = project_id, language, "failed to decode scanner results");
        ReportError::MalformedPackage {
            ecosystem: language.to_string(),
            package: format!("Source::{}", project_id),
            reason: e.to_string(),
        }
    })
}

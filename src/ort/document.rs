//! Subset of the ORT result format that license aggregation reads.
//!
//! Unknown fields are ignored. Maps are kept as [`serde_json::Map`] so that
//! document order survives parsing (`preserve_order`).

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct OrtDocument {
    pub analyzer: AnalyzerRun,
    #[serde(default)]
    pub scanner: Option<ScannerRun>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzerRun {
    pub result: AnalyzerResult,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzerResult {
    pub packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
pub struct Package {
    /// `type:namespace:name:version`, e.g. `Crate::serde:1.0.150`.
    pub id: String,
    /// Expected to be a map whose values are a string, a list of strings, or
    /// a map of strings. Kept raw: the shape is only checked for packages that
    /// survive the notice filter.
    #[serde(default)]
    pub declared_licenses_processed: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ScannerRun {
    /// Project id -> [`ProjectScanResults`]; decoded lazily so a bad entry can name its project.
    #[serde(default)]
    pub results: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectScanResults {
    #[serde(default)]
    pub scan_results: Vec<ScanResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScanResult {
    #[serde(default)]
    pub provenance: Option<Provenance>,
    #[serde(default)]
    pub license_findings: Vec<LicenseFinding>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LicenseFinding {
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub provenance: Option<Provenance>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Provenance {
    #[serde(default)]
    pub download_time: Option<String>,
}

impl Provenance {
    /// Non-empty source hint, if any.
    pub fn hint(&self) -> Option<&str> {
        self.download_time.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_analyzer_document() {
        let doc: OrtDocument = serde_json::from_value(json!({
            "repository": {"vcs": {}},
            "analyzer": {
                "start_time": "2024-01-01T00:00:00Z",
                "result": {
                    "projects": [],
                    "packages": [
                        {
                            "id": "Crate::serde:1.0.150",
                            "declared_licenses": ["MIT OR Apache-2.0"],
                            "declared_licenses_processed": {
                                "spdx_expression": "Apache-2.0 OR MIT"
                            }
                        },
                        {"id": "Crate::bare:0.1.0"}
                    ]
                }
            }
        }))
        .unwrap();

        let packages = &doc.analyzer.result.packages;
        assert_eq!(packages.len(), 2);
        assert!(packages[1].declared_licenses_processed.is_none());
        assert!(doc.scanner.is_none());
    }

    #[test]
    fn test_declared_licenses_shape_not_checked_at_parse_time() {
        let doc: OrtDocument = serde_json::from_value(json!({
            "analyzer": {"result": {"packages": [
                {"id": "NPM::kept:1.0.0", "declared_licenses_processed": {"spdx_expression": "MIT"}},
                {"id": "NPM::dropped:1.0.0", "declared_licenses_processed": ["MIT"]}
            ]}}
        }))
        .unwrap();
        assert_eq!(
            doc.analyzer.result.packages[1].declared_licenses_processed,
            Some(json!(["MIT"]))
        );
    }

    #[test]
    fn test_missing_packages_is_an_error() {
        let err = serde_json::from_value::<OrtDocument>(json!({
            "analyzer": {"result": {"projects": []}}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("packages"));
    }

    #[test]
    fn test_scanner_results_keep_document_order() {
        let doc: OrtDocument = serde_json::from_str(
            r#"{
                "analyzer": {"result": {"packages": []}},
                "scanner": {"results": {"zeta": {}, "alpha": {}, "mid": {}}}
            }"#,
        )
        .unwrap();
        let keys: Vec<_> = doc.scanner.unwrap().results.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_provenance_hint_is_ignored() {
        let p = Provenance {
            download_time: Some(String::new()),
        };
        assert_eq!(p.hint(), None);
    }
}

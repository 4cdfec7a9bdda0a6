use std::fmt;
use std::path::{Path, PathBuf};

const ANALYZER_RESULT: &str = "analyzer-result.json";
const SCAN_RESULT: &str = "scan-result.json";
const NOTICE: &str = "NOTICE_DEFAULT";

/// Which ORT stage produced the document being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Analyzer,
    Scan,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultKind::Analyzer => write!(f, "analyzer results"),
            ResultKind::Scan => write!(f, "scan results"),
        }
    }
}

/// The ORT output folder of one ecosystem.
#[derive(Debug, Clone)]
pub struct OrtResults {
    pub name: String,
    pub analyzer_result_file: PathBuf,
    pub scan_result_file: PathBuf,
    pub notice_file: PathBuf,
}

impl OrtResults {
    /// `folder` is resolved against `root`.
    pub fn new(name: impl Into<String>, root: &Path, folder: &Path) -> Self {
        let folder = root.join(folder);
        Self {
            name: name.into(),
            analyzer_result_file: folder.join(ANALYZER_RESULT),
            scan_result_file: folder.join(SCAN_RESULT),
            notice_file: folder.join(NOTICE),
        }
    }

    pub fn has_scan_results(&self) -> bool {
        self.scan_result_file.exists()
    }

    pub fn result_kind(&self) -> ResultKind {
        if self.has_scan_results() {
            ResultKind::Scan
        } else {
            ResultKind::Analyzer
        }
    }

    /// Scan results when present, analyzer results otherwise.
    pub fn result_file(&self) -> &Path {
        match self.result_kind() {
            ResultKind::Scan => &self.scan_result_file,
            ResultKind::Analyzer => &self.analyzer_result_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_under_root() {
        let results = OrtResults::new("Rust", Path::new("/repo/utils"), Path::new("glide-core/ort_results"));
        assert_eq!(
            results.analyzer_result_file,
            PathBuf::from("/repo/utils/glide-core/ort_results/analyzer-result.json")
        );
        assert_eq!(
            results.notice_file,
            PathBuf::from("/repo/utils/glide-core/ort_results/NOTICE_DEFAULT")
        );
    }

    #[test]
    fn test_prefers_scan_results_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let results = OrtResults::new("PHP", dir.path(), Path::new("ort_results"));
        assert!(!results.has_scan_results());
        assert_eq!(results.result_file(), results.analyzer_result_file.as_path());

        std::fs::create_dir_all(dir.path().join("ort_results")).unwrap();
        std::fs::write(&results.scan_result_file, "{}").unwrap();
        assert!(results.has_scan_results());
        assert_eq!(results.result_kind(), ResultKind::Scan);
        assert_eq!(results.result_file(), results.scan_result_file.as_path());
    }
}

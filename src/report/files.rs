use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::license::classifier::Aggregation;
use crate::models::PackageLicense;

pub const FINAL_LIST: &str = "final_package_list.txt";
pub const SKIPPED_LIST: &str = "skipped_package_list.txt";
pub const UNAPPROVED_LIST: &str = "unapproved_package_list.txt";

/// Where the three lists were written.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub final_list: PathBuf,
    pub skipped_list: PathBuf,
    pub unapproved_list: PathBuf,
}

/// Write the final, skipped and unapproved lists into `output_dir`, replacing old contents.
pub fn write_all(output_dir: &Path, agg: &Aggregation) -> Result<ReportPaths, ReportError> {
    std::fs::create_dir_all(output_dir).map_err(|e| ReportError::io(output_dir, e))?;

    let paths = ReportPaths {
        final_list: output_dir.join(FINAL_LIST),
        skipped_list: output_dir.join(SKIPPED_LIST),
        unapproved_list: output_dir.join(UNAPPROVED_LIST),
    };

    write_list(&paths.final_list, &agg.final_packages)?;
    write_list(&paths.skipped_list, &agg.skipped_packages)?;
    write_list(&paths.unapproved_list, &agg.unapproved_packages)?;

    Ok(paths)
}

/// One rendered record per line, each terminated by `\n`.
pub fn write_list(path: &Path, packages: &[PackageLicense]) -> Result<(), ReportError> {
    let write = || -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        for package in packages {
            writeln!(out, "{}", package)?;
        }
        out.flush()
    };
    write().map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), entries = packages.len(), "wrote package list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Extracted;
    use crate::config::Policy;
    use crate::license::classifier::Classifier;

    fn aggregation() -> Aggregation {
        let policy = Policy::new(["MIT"], Vec::<String>::new());
        let mut agg = Aggregation::new();
        Classifier::new(&policy).push_all(
            &mut agg,
            vec![
                Extracted::licensed("Crate::a:1.0.0", "Rust", "MIT"),
                Extracted::skipped("Crate::b:1.0.0", "Rust"),
                Extracted::licensed("Crate::c:1.0.0", "Rust", "GPL-3.0"),
            ],
        );
        agg
    }

    #[test]
    fn test_write_all_renders_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_all(dir.path(), &aggregation()).unwrap();

        assert_eq!(
            std::fs::read_to_string(&paths.final_list).unwrap(),
            "Package_name: Crate::a:1.0.0, Language: Rust, License: MIT\n"
        );
        assert_eq!(
            std::fs::read_to_string(&paths.skipped_list).unwrap(),
            "Package_name: Crate::b:1.0.0, Language: Rust\n"
        );
        assert_eq!(
            std::fs::read_to_string(&paths.unapproved_list).unwrap(),
            "Package_name: Crate::c:1.0.0, Language: Rust, License: GPL-3.0\n"
        );
    }

    #[test]
    fn test_write_all_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(FINAL_LIST), "stale line\nanother\nand more\n").unwrap();

        write_all(dir.path(), &Aggregation::new()).unwrap();
        assert_eq!(std::fs::read_to_string(dir.path().join(FINAL_LIST)).unwrap(), "");
    }

    #[test]
    fn test_write_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let agg = aggregation();
        let first = write_all(dir.path(), &agg).unwrap();
        let before = std::fs::read(&first.unapproved_list).unwrap();
        write_all(dir.path(), &agg).unwrap();
        assert_eq!(std::fs::read(&first.unapproved_list).unwrap(), before);
    }
}

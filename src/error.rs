use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a report run.
///
/// The only absence that is not an error is a missing `scan-result.json`,
/// which just means the ecosystem was analyzed but never deep-scanned.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A results or notice file that the run needs does not exist.
    #[error("missing input file: {}", .path.display())]
    MissingInput { path: PathBuf },

    /// A file exists but could not be read or written.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The results document is not JSON or lacks `analyzer.result.packages`.
    #[error("malformed results document {}: {source}", .path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A package entry (or scanner project entry) has an unusable shape.
    #[error("malformed package `{package}` in {ecosystem}: {reason}")]
    MalformedPackage {
        ecosystem: String,
        package: String,
        reason: String,
    },

    /// A license value is neither a string, a list of strings, nor a mapping of strings.
    #[error("unsupported license value for `{package}` in {ecosystem}: {value}")]
    AmbiguousLicense {
        ecosystem: String,
        package: String,
        value: String,
    },

    /// The policy config file is not valid TOML for [`crate::config::Config`].
    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ReportError::MissingInput { path }
        } else {
            ReportError::Io { path, source }
        }
    }
}

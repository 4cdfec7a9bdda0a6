use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ReportError;
use crate::models::{ApprovalReason, Verdict};

/// License expressions approved up front.
///
/// Compound expressions are listed verbatim: matching is exact string
/// equality, so `"Apache-2.0 OR MIT"` and `"MIT OR Apache-2.0"` are distinct.
pub const APPROVED_LICENSES: &[&str] = &[
    "(Apache-2.0 OR MIT) AND Unicode-DFS-2016",
    "(Apache-2.0 OR MIT) AND Unicode-3.0",
    "0BSD OR Apache-2.0 OR MIT",
    "Apache-2.0",
    "Apache-2.0 AND (Apache-2.0 OR BSD-2-Clause)",
    "Apache-2.0 AND (Apache-2.0 OR BSD-3-Clause)",
    "Apache-2.0 AND MIT",
    "Apache-2.0 OR Apache-2.0 WITH LLVM-exception OR MIT",
    "Apache-2.0 OR BSD-2-Clause OR MIT",
    "Apache-2.0 OR BSL-1.0",
    "Apache-2.0 OR ISC OR MIT",
    "Apache-2.0 OR MIT",
    "Apache-2.0 OR MIT OR Zlib",
    "Apache-2.0 WITH LLVM-exception",
    "BSD License",
    "BSD-2-Clause",
    "BSD-2-Clause OR Apache-2.0",
    "BSD-3-Clause",
    "BSD-3-Clause OR Apache-2.0",
    "ISC",
    "MIT",
    "MPL-2.0",
    "MIT OR Unlicense",
    "PSF-2.0",
    "Unicode-3.0",
    "Unicode-DFS-2016",
    "Zlib",
    "BSD-3-Clause AND MIT",
    "Apache-2.0 OR LGPL-2.1-or-later OR MIT",
    "Apache-2.0 AND ISC",
    "Apache-2.0 AND (Apache-2.0 OR MIT) AND MIT",
    "(Apache-2.0 OR ISC) AND ISC",
    "(Apache-2.0 OR ISC) AND ISC AND OpenSSL",
    "CDLA-Permissive-2.0",
    // PHP license headers show up in scanned sources
    "PHP-3.01",
];

/// Packages whose non-approved licenses received a manual exception.
pub const APPROVED_PACKAGES: &[&str] = &[
    "PyPI::pathspec:0.12.1",
    "PyPI::certifi:2023.11.17",
    "Crate::ring:0.17.8",
    "Maven:org.json:json:20231013",
];

/// Ecosystems scanned by default: `(display name, results folder)`.
pub const DEFAULT_ECOSYSTEMS: &[(&str, &str)] = &[
    ("Rust", "../valkey-glide/glide-core/ort_results"),
    ("PHP", "../ort_results"),
];

/// Immutable approval policy for one run.
#[derive(Debug, Clone, Default)]
pub struct Policy {
    licenses: HashSet<String>,
    packages: HashSet<String>,
}

impl Policy {
    pub fn new<L, P>(licenses: L, packages: P) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            licenses: licenses.into_iter().map(Into::into).collect(),
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_license_approved(&self, license: &str) -> bool {
        self.licenses.contains(license)
    }

    pub fn is_package_approved(&self, package_id: &str) -> bool {
        self.packages.contains(package_id)
    }

    /// Approve on either list; the license list is checked first.
    pub fn verdict(&self, license: &str, package_id: &str) -> Verdict {
        if self.is_license_approved(license) {
            Verdict::Approved(ApprovalReason::License)
        } else if self.is_package_approved(package_id) {
            Verdict::Approved(ApprovalReason::Package)
        } else {
            Verdict::Unapproved
        }
    }
}

/// An ecosystem to process: display name plus results folder relative to the root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EcosystemConfig {
    pub name: String,
    pub results: PathBuf,
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub policy: Policy,
    /// Processed in this order; output ordering follows it.
    pub ecosystems: Vec<EcosystemConfig>,
}

impl Default for Config {
    /// Built-in allow-lists and ecosystem folders.
    fn default() -> Self {
        Config {
            policy: Policy::new(
                APPROVED_LICENSES.iter().copied(),
                APPROVED_PACKAGES.iter().copied(),
            ),
            ecosystems: DEFAULT_ECOSYSTEMS
                .iter()
                .map(|(name, results)| EcosystemConfig {
                    name: name.to_string(),
                    results: PathBuf::from(results),
                })
                .collect(),
        }
    }
}

/// On-disk shape of `config.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    policy: PolicyFile,
    ecosystems: Option<Vec<EcosystemConfig>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyFile {
    /// When `false`, the listed entries replace the built-in lists.
    #[serde(default = "default_extend")]
    extend_defaults: bool,
    #[serde(default)]
    licenses: Vec<String>,
    #[serde(default)]
    packages: Vec<String>,
}

impl Default for PolicyFile {
    fn default() -> Self {
        Self {
            extend_defaults: default_extend(),
            licenses: Vec::new(),
            packages: Vec::new(),
        }
    }
}

fn default_extend() -> bool {
    true
}

impl ConfigFile {
    fn into_config(self) -> Config {
        let defaults = Config::default();

        let policy = if self.policy.extend_defaults {
            let mut policy = defaults.policy;
            policy.licenses.extend(self.policy.licenses);
            policy.packages.extend(self.policy.packages);
            policy
        } else {
            Policy::new(self.policy.licenses, self.policy.packages)
        };

        Config {
            policy,
            ecosystems: self.ecosystems.unwrap_or(defaults.ecosystems),
        }
    }
}

/// Load the run configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<root>/.ort-license-report/config.toml`
/// 3. `~/.config/ort-license-report/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(root: &Path, config_override: Option<&Path>) -> Result<Config, ReportError> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = root.join(".ort-license-report").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("ort-license-report")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    parse_config(&content).map_err(|source| ReportError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    let file: ConfigFile = toml::from_str(content)?;
    tracing::debug!(?file, "loaded config file");
    Ok(file.into_config())
}

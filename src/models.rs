use std::fmt;

/// One classified (or skipped) package/license pair.
///
/// `license` is `None` only for packages pruned by the notice filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLicense {
    pub package_id: String,
    pub language: String,
    pub license: Option<String>,
}

impl PackageLicense {
    pub fn new(package_id: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
            language: language.into(),
            license: None,
        }
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }
}

impl fmt::Display for PackageLicense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Package_name: {}, Language: {}",
            self.package_id, self.language
        )?;
        if let Some(license) = &self.license {
            write!(f, ", License: {}", license)?;
        }
        Ok(())
    }
}

/// Why an approved record was approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalReason {
    License,
    Package,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved(ApprovalReason),
    Unapproved,
}

/// Output of the extractor, before policy evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    /// Package not referenced by the notice file.
    Skipped(PackageLicense),
    /// Package/finding carrying one license expression.
    Licensed {
        package_id: String,
        language: String,
        license: String,
    },
}

impl Extracted {
    pub fn skipped(package_id: impl Into<String>, language: impl Into<String>) -> Self {
        Extracted::Skipped(PackageLicense::new(package_id, language))
    }

    pub fn licensed(
        package_id: impl Into<String>,
        language: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Extracted::Licensed {
            package_id: package_id.into(),
            language: language.into(),
            license: license.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_license() {
        let p = PackageLicense::new("Crate::serde:1.0.150", "Rust").with_license("Apache-2.0 OR MIT");
        assert_eq!(
            p.to_string(),
            "Package_name: Crate::serde:1.0.150, Language: Rust, License: Apache-2.0 OR MIT"
        );
    }

    #[test]
    fn test_display_without_license() {
        let p = PackageLicense::new("PyPI::foo:1.0.0", "Python");
        assert_eq!(p.to_string(), "Package_name: PyPI::foo:1.0.0, Language: Python");
    }
}

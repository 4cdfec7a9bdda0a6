use std::collections::BTreeSet;

use crate::config::Policy;
use crate::models::{Extracted, PackageLicense, Verdict};

/// Per-language record counts, used by the console summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCounts {
    pub language: String,
    pub approved: usize,
    pub skipped: usize,
    pub unapproved: usize,
}

/// Everything classified during a run.
///
/// All collections are append-only and keep insertion order, so the written
/// reports follow ecosystem, package and license order exactly.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub final_packages: Vec<PackageLicense>,
    pub skipped_packages: Vec<PackageLicense>,
    pub unapproved_packages: Vec<PackageLicense>,
    /// Licenses of every evaluated record; skipped records add nothing.
    pub all_licenses: BTreeSet<String>,
    languages: Vec<LanguageCounts>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records across the three collections.
    pub fn len(&self) -> usize {
        self.final_packages.len() + self.skipped_packages.len() + self.unapproved_packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_unapproved(&self) -> bool {
        !self.unapproved_packages.is_empty()
    }

    /// Counts in the order languages were first seen.
    pub fn counts_by_language(&self) -> &[LanguageCounts] {
        &self.languages
    }

    fn counts_mut(&mut self, language: &str) -> &mut LanguageCounts {
        let idx = match self.languages.iter().position(|c| c.language == language) {
            Some(idx) => idx,
            None => {
                self.languages.push(LanguageCounts {
                    language: language.to_string(),
                    ..Default::default()
                });
                self.languages.len() - 1
            }
        };
        &mut self.languages[idx]
    }
}

/// Applies a [`Policy`] to extracted records.
pub struct Classifier<'a> {
    policy: &'a Policy,
}

impl<'a> Classifier<'a> {
    pub fn new(policy: &'a Policy) -> Self {
        Self { policy }
    }

    /// Pure function of the license, the package id and the policy.
    pub fn classify(&self, license: &str, package_id: &str) -> Verdict {
        self.policy.verdict(license, package_id)
    }

    /// File one extracted record into `agg`.
    ///
    /// Skipped records are never evaluated against the policy.
    pub fn push(&self, agg: &mut Aggregation, extracted: Extracted) -> Option<Verdict> {
        match extracted {
            Extracted::Skipped(record) => {
                agg.counts_mut(&record.language).skipped += 1;
                agg.skipped_packages.push(record);
                None
            }
            Extracted::Licensed {
                package_id,
                language,
                license,
            } => {
                let verdict = self.classify(&license, &package_id);
                agg.all_licenses.insert(license.clone());
                let record = PackageLicense::new(package_id, language).with_license(license);
                match verdict {
                    Verdict::Approved(_) => {
                        agg.counts_mut(&record.language).approved += 1;
                        agg.final_packages.push(record);
                    }
                    Verdict::Unapproved => {
                        agg.counts_mut(&record.language).unapproved += 1;
                        agg.unapproved_packages.push(record);
                    }
                }
                Some(verdict)
            }
        }
    }

    pub fn push_all(
        &self,
        agg: &mut Aggregation,
        extracted: impl IntoIterator<Item = Extracted>,
    ) {
        for record in extracted {
            self.push(agg, record);
        }
    }
}

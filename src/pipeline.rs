use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::error::ReportError;
use crate::license::classifier::{Aggregation, Classifier};
use crate::license::extractor::extract;
use crate::ort::loader::load;
use crate::ort::source::OrtResults;

/// Process every configured ecosystem in order and classify its licenses.
///
/// Stops at the first ecosystem that fails to load or extract.
pub fn run(config: &Config, root: &Path, quiet: bool) -> Result<Aggregation, ReportError> {
    let classifier = Classifier::new(&config.policy);
    let mut agg = Aggregation::new();

    for ecosystem in &config.ecosystems {
        let results = OrtResults::new(&ecosystem.name, root, &ecosystem.results);
        let kind = results.result_kind();
        if !quiet {
            eprintln!(
                "  {} Processing {} using {}",
                "→".cyan(),
                results.name,
                kind
            );
        }
        tracing::info!(
            language = %results.name,
            file = %results.result_file().display(),
            "loading results"
        );

        let loaded = load(&results)?;
        let extracted = extract(&results.name, &loaded)?;
        tracing::info!(language = %results.name, records = extracted.len(), "extracted licenses");

        classifier.push_all(&mut agg, extracted);
    }

    Ok(agg)
}

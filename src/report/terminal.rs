use std::io::Write;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::license::classifier::Aggregation;
use crate::report::files::ReportPaths;

/// Print the run summary to stdout.
pub fn render(agg: &Aggregation, paths: &ReportPaths, verbose: bool, quiet: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, agg, paths, verbose, quiet)?;
    out.flush()?;
    Ok(())
}

/// Summary table (or totals line), then found licenses, then unapproved records.
pub fn write_report(
    out: &mut impl Write,
    agg: &Aggregation,
    paths: &ReportPaths,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    if quiet {
        writeln!(
            out,
            "Total: {}  Approved: {}  Skipped: {}  Unapproved: {}",
            agg.len(),
            agg.final_packages.len().to_string().green(),
            agg.skipped_packages.len().to_string().yellow(),
            agg.unapproved_packages.len().to_string().red(),
        )?;
    } else {
        writeln!(
            out,
            "\n {} v{}\n",
            "ort-license-report".bold(),
            env!("CARGO_PKG_VERSION")
        )?;
        if agg.is_empty() {
            writeln!(out, " No packages found.")?;
        } else {
            writeln!(out, "{}", summary_table(agg))?;
        }
        writeln!(out, " Final list      : {}", paths.final_list.display())?;
        writeln!(out, " Skipped list    : {}", paths.skipped_list.display())?;
        writeln!(out, " Unapproved list : {}", paths.unapproved_list.display())?;
    }

    if verbose {
        writeln!(out, "\n\n#### Approved Packages #####\n")?;
        for package in &agg.final_packages {
            writeln!(out, "{}", package)?;
        }
    }

    writeln!(out, "\n\n#### Found Licenses #####\n")?;
    for license in &agg.all_licenses {
        writeln!(out, "{}", license)?;
    }

    writeln!(out, "\n\n#### unknown / Not Pre-Approved Licenses #####\n")?;
    for package in &agg.unapproved_packages {
        writeln!(out, "{}", package)?;
    }

    Ok(())
}

fn summary_table(agg: &Aggregation) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Language").add_attribute(Attribute::Bold),
            Cell::new("Approved").add_attribute(Attribute::Bold),
            Cell::new("Skipped").add_attribute(Attribute::Bold),
            Cell::new("Unapproved").add_attribute(Attribute::Bold),
        ]);

    for counts in agg.counts_by_language() {
        let unapproved_color = if counts.unapproved > 0 {
            Color::Red
        } else {
            Color::Green
        };
        table.add_row(vec![
            Cell::new(&counts.language),
            Cell::new(counts.approved).set_alignment(CellAlignment::Right),
            Cell::new(counts.skipped).set_alignment(CellAlignment::Right),
            Cell::new(counts.unapproved)
                .fg(unapproved_color)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

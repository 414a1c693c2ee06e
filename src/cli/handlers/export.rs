//! Generic export completion
//!
//! Every export command follows the same flow:
//! 1. Resolve context and build a client
//! 2. Fetch all records (any API failure aborts here, before any file is touched)
//! 3. Map records onto a `CsvDocument`
//! 4. Write the file and report where it went
//!
//! Steps 1-3 are command specific; this module owns step 4.

use std::path::Path;

use colored::Colorize;
use log::debug;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::ExportSummary;
use crate::output::{CsvDocument, Formattable};

/// Write `doc` to `path` and print a summary in the requested format.
///
/// The file is truncated and rewritten; there is no append mode.
pub fn finish_export(
    format: OutputFormat,
    export: &str,
    doc: &CsvDocument,
    path: &Path,
) -> Result<ExportSummary> {
    debug!("Writing {} rows to {}", doc.len(), path.display());
    doc.write_to(path)?;

    let summary = ExportSummary {
        export: export.to_string(),
        file: path.display().to_string(),
        rows: doc.len(),
    };

    match format {
        OutputFormat::Pretty => println!(
            "{} {} exported to {} ({} rows)",
            "✓".green(),
            summary.export,
            summary.file.bold(),
            summary.rows
        ),
        OutputFormat::Table | OutputFormat::Json => vec![summary.clone()].print(format)?,
    }

    Ok(summary)
}

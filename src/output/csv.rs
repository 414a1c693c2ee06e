//! CSV export
//!
//! A [`CsvDocument`] holds a fixed header and rows of string cells. Every
//! row must have exactly as many cells as the header.

use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Rows sharing a fixed, ordered column set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvDocument {
    pub fn new<S: AsRef<str>>(header: &[S]) -> Self {
        Self {
            header: header.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row, rejecting one whose width differs from the header.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.header.len() {
            return Err(Error::Other(format!(
                "CSV row {} has {} columns, header has {}",
                self.rows.len() + 1,
                row.len(),
                self.header.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (header excluded)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write header and rows to any writer.
    pub fn write<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv = ::csv::Writer::from_writer(writer);
        csv.write_record(&self.header)?;
        for row in &self.rows {
            csv.write_record(row)?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Write to a file, replacing any existing content.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write(file)
    }
}

/// Render an optional value as a CSV cell; absent values are empty.
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

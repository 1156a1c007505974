//! Minimal delimited-text table reader.
//!
//! Handles the export quirks of the municipal open-data files: a header row,
//! double-quoted fields (which may contain the delimiter, newlines, and `""`
//! escapes), CRLF line endings and an optional UTF-8 BOM. Rows whose field
//! count does not match the header are skipped.

use std::path::Path;

use tracing::debug;

use super::IngestError;

/// A parsed table: header names plus rows of raw string cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    skipped: usize,
}

impl Table {
    /// Parse `text` using `delimiter`.
    pub fn parse(text: &str, delimiter: char) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut records = split_records(text, delimiter).into_iter();

        let headers: Vec<String> = match records.next() {
            Some(header) => header.into_iter().map(|h| h.trim().to_string()).collect(),
            None => return Self::default(),
        };

        let mut rows = Vec::new();
        let mut skipped = 0;
        for record in records {
            if record.len() == headers.len() {
                rows.push(record);
            } else {
                skipped += 1;
            }
        }

        Self {
            headers,
            rows,
            skipped,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows kept.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows dropped for having the wrong number of fields.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Index of a named column.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Cells of a named column, in row order.
    pub fn values<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.column(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Iterate over rows as slices of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Split text into records of fields, honoring double quotes.
fn split_records(text: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                let done = std::mem::take(&mut record);
                if !(done.len() == 1 && done[0].is_empty()) {
                    records.push(done);
                }
            }
            c if c == delimiter => record.push(std::mem::take(&mut field)),
            c => field.push(c),
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}

/// Read a table whose `required_column` decides the delimiter.
///
/// Tries `,` first and falls back to `;` when the column is not found.
pub fn read_table_with_fallback(path: &Path, required_column: &str) -> Result<Table, IngestError> {
    let text = read_text(path)?;

    for delimiter in [',', ';'] {
        let table = Table::parse(&text, delimiter);
        if table.has_column(required_column) {
            debug!(
                path = %path.display(),
                delimiter = %delimiter,
                rows = table.len(),
                skipped = table.skipped(),
                "Read table"
            );
            return Ok(table);
        }
    }

    Err(IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: required_column.to_string(),
    })
}

/// Read a table with a fixed delimiter.
pub fn read_table(path: &Path, delimiter: char) -> Result<Table, IngestError> {
    let text = read_text(path)?;
    let table = Table::parse(&text, delimiter);
    debug!(
        path = %path.display(),
        rows = table.len(),
        skipped = table.skipped(),
        "Read table"
    );
    Ok(table)
}

fn read_text(path: &Path) -> Result<String, IngestError> {
    if !path.exists() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

//! Parsed table and source file metadata.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::leadsift::OPTIONAL_COLUMNS;

/// What was read from a lead file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    pub path: PathBuf,
    /// `sha256:` followed by the hex digest of the raw bytes.
    pub hash: String,
    pub size_bytes: u64,
    /// csv, tsv, csv-semicolon or psv, from the detected delimiter.
    pub format: String,
    /// Non-blank data rows, excluding the header.
    pub row_count: usize,
    pub column_count: usize,
    /// Optional lead columns (Phone, Industry, Revenue) the file lacks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub absent_columns: Vec<String>,
    /// Rows with bytes that were not valid UTF-8.
    #[serde(default)]
    pub lossy_rows: usize,
    pub ingested_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Describe a file from its raw contents and the table parsed out of it.
    pub fn describe(path: &Path, contents: &[u8], table: &DataTable) -> Self {
        let hash = format!("sha256:{:x}", Sha256::digest(contents));
        let absent_columns = OPTIONAL_COLUMNS
            .iter()
            .filter(|col| table.column_index(col).is_none())
            .map(|col| col.to_string())
            .collect();

        Self {
            file: path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            hash,
            size_bytes: contents.len() as u64,
            format: format_name(table.delimiter).to_string(),
            row_count: table.row_count(),
            column_count: table.column_count(),
            absent_columns,
            lossy_rows: table.lossy_rows,
            ingested_at: Utc::now(),
        }
    }

    /// Whether every optional lead column was present.
    pub fn has_all_columns(&self) -> bool {
        self.absent_columns.is_empty()
    }
}

fn format_name(delimiter: u8) -> &'static str {
    match delimiter {
        b'\t' => "tsv",
        b',' => "csv",
        b';' => "csv-semicolon",
        b'|' => "psv",
        _ => "delimited",
    }
}

/// Parsed tabular data: a header row and string cells.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order), each padded to the header width.
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
    /// Rows decoded with replacement characters.
    pub lossy_rows: usize,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
            lossy_rows: 0,
        }
    }

    /// Record how many rows needed lossy decoding.
    pub fn with_lossy_rows(mut self, lossy_rows: usize) -> Self {
        self.lossy_rows = lossy_rows;
        self
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }
}

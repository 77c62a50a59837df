//! I/O error types for warpband-io.

use std::path::PathBuf;

/// Errors from file I/O, CSV parsing, and result serialization.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the CSV parser encounters a malformed record.
    #[error("CSV parse error in {path} at byte offset {offset}")]
    CsvParse {
        /// Path to the CSV file.
        path: PathBuf,
        /// Byte offset where the error occurred.
        offset: u64,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Returned when the CSV file contains no data rows.
    #[error("empty dataset (no data rows) in {path}")]
    EmptyDataset {
        /// Path to the CSV file.
        path: PathBuf,
    },

    /// Returned when a row has an identifier but no values, or no identifier.
    #[error("row {row_index} in {path} has no {missing}")]
    IncompleteRow {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index.
        row_index: usize,
        /// What the row lacks: "identifier" or "values".
        missing: &'static str,
    },

    /// Returned when a cell value is NaN, Inf, or otherwise not a finite float.
    #[error("non-finite value in {path}: row {row_index}, column {col_index}, raw value \"{raw}\"")]
    NonFiniteValue {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index.
        row_index: usize,
        /// Zero-based column index (excluding the identifier column).
        col_index: usize,
        /// The raw string value that failed to parse.
        raw: String,
    },

    /// Returned when the same sequence identifier appears more than once.
    #[error("duplicate sequence ID \"{id}\" in {path}: first at row {first_row}, again at row {second_row}")]
    DuplicateId {
        /// Path to the CSV file.
        path: PathBuf,
        /// The duplicated identifier.
        id: String,
        /// Zero-based row index of the first occurrence.
        first_row: usize,
        /// Zero-based row index of the second occurrence.
        second_row: usize,
    },

    /// Returned when the output directory cannot be created.
    #[error("cannot create output directory {path}")]
    OutputDirCreate {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a result file cannot be written.
    #[error("cannot write file {path}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a result cannot be encoded as JSON.
    #[error("cannot serialize result for {path}")]
    Serialize {
        /// Destination path of the result.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

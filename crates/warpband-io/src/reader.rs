//! CSV sequence reader with full input validation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};
use warpband_dtw::Sequence;

use crate::IoError;
use crate::domain::{Dataset, SequenceId};

/// Reads labelled sequences from a headerless CSV file.
///
/// Expected format, one sequence per row, rows of any length:
///
/// ```text
/// id,v0,v1,...,vk
/// ```
///
/// Surrounding whitespace is trimmed and lines starting with `#` are skipped.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::EmptyDataset`] | Zero data rows |
/// | [`IoError::IncompleteRow`] | Row has an empty identifier or no values |
/// | [`IoError::NonFiniteValue`] | Cell is NaN, Inf, or unparseable float |
/// | [`IoError::DuplicateId`] | Same identifier appears twice |
pub struct SequenceReader {
    path: PathBuf,
}

impl SequenceReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read and validate the CSV file, returning a [`Dataset`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Dataset, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(file);

        let mut ids = Vec::new();
        let mut sequences = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| IoError::CsvParse {
                path: self.path.clone(),
                offset: e.position().map_or(0, |p| p.byte()),
                source: e,
            })?;

            let id = record.get(0).unwrap_or("").to_string();
            if id.is_empty() {
                return Err(self.incomplete(row_index, "identifier"));
            }
            if record.len() < 2 {
                return Err(self.incomplete(row_index, "values"));
            }

            if let Some(&first_row) = seen.get(&id) {
                return Err(IoError::DuplicateId {
                    path: self.path.clone(),
                    id,
                    first_row,
                    second_row: row_index,
                });
            }
            seen.insert(id.clone(), row_index);

            let values = record
                .iter()
                .skip(1)
                .enumerate()
                .map(|(col_index, raw)| self.parse_value(row_index, col_index, raw))
                .collect::<Result<Vec<f64>, IoError>>()?;
            debug!(row_index, len = values.len(), "parsed row");

            // Non-empty and finite were checked above.
            let sequence =
                Sequence::new(values).map_err(|_| self.incomplete(row_index, "values"))?;

            ids.push(SequenceId::new(id));
            sequences.push(sequence);
        }

        let dataset = Dataset { ids, sequences };
        let Some((min_len, max_len)) = dataset.length_range() else {
            return Err(IoError::EmptyDataset {
                path: self.path.clone(),
            });
        };

        info!(n_sequences = dataset.len(), min_len, max_len, "dataset loaded");
        Ok(dataset)
    }

    fn parse_value(&self, row_index: usize, col_index: usize, raw: &str) -> Result<f64, IoError> {
        let non_finite = || IoError::NonFiniteValue {
            path: self.path.clone(),
            row_index,
            col_index,
            raw: raw.to_string(),
        };
        let value: f64 = raw.parse().map_err(|_| non_finite())?;
        if !value.is_finite() {
            return Err(non_finite());
        }
        Ok(value)
    }

    fn incomplete(&self, row_index: usize, missing: &'static str) -> IoError {
        IoError::IncompleteRow {
            path: self.path.clone(),
            row_index,
            missing,
        }
    }
}

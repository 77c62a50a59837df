//! JSON writer for pairwise distance matrices.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};
use warpband_dtw::{BandConfig, DistanceMatrix};

use crate::IoError;
use crate::domain::SequenceId;

/// Writes distance results to a JSON file.
///
/// Creates the parent directory on construction if it does not exist.
/// Unreachable distances are written as `null`, since JSON has no infinity.
pub struct ResultWriter {
    path: PathBuf,
}

impl ResultWriter {
    /// Create a new writer targeting `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the parent directory cannot be created.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn new(path: &Path) -> Result<Self, IoError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| IoError::OutputDirCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
            debug!("output directory ready");
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Return the output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a pairwise matrix with its identifiers and configuration.
    ///
    /// `ids[i]` labels row and column `i` of `matrix`; rows are "from" and
    /// columns are the reference sequence.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`IoError::Serialize`] | JSON encoding failed |
    /// | [`IoError::WriteFile`] | The file cannot be written |
    #[instrument(skip_all, fields(n = ids.len()))]
    pub fn write_matrix(
        &self,
        ids: &[SequenceId],
        matrix: &DistanceMatrix,
        band: BandConfig,
        variant: &str,
    ) -> Result<(), IoError> {
        debug_assert_eq!(ids.len(), matrix.len());

        let distances: Vec<Vec<Option<f64>>> = (0..matrix.len())
            .map(|i| matrix.row(i).iter().map(|d| d.finite()).collect())
            .collect();

        let nearest: Vec<Option<NearestEntry<'_>>> = (0..matrix.len())
            .map(|i| {
                matrix.nearest(i).map(|(j, d)| NearestEntry {
                    id: ids[j].as_str(),
                    distance: d.finite(),
                })
            })
            .collect();

        let artifact = MatrixArtifact {
            variant,
            band_fraction: band.fraction(),
            n_sequences: ids.len(),
            unreachable_pairs: matrix.unreachable_count(),
            ids: ids.iter().map(SequenceId::as_str).collect(),
            distances,
            nearest,
        };

        let json = serde_json::to_string_pretty(&artifact).map_err(|e| IoError::Serialize {
            path: self.path.clone(),
            source: e,
        })?;
        fs::write(&self.path, &json).map_err(|e| IoError::WriteFile {
            path: self.path.clone(),
            source: e,
        })?;

        info!(path = %self.path.display(), "distance matrix written");
        Ok(())
    }
}

#[derive(Serialize)]
struct MatrixArtifact<'a> {
    variant: &'a str,
    band_fraction: f64,
    n_sequences: usize,
    unreachable_pairs: usize,
    ids: Vec<&'a str>,
    distances: Vec<Vec<Option<f64>>>,
    nearest: Vec<Option<NearestEntry<'a>>>,
}

#[derive(Serialize)]
struct NearestEntry<'a> {
    id: &'a str,
    distance: Option<f64>,
}

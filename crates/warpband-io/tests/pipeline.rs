//! End-to-end integration tests: CSV -> pairwise matrix -> JSON -> deserialize.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use warpband_dtw::{BandConfig, BandedDistanceEngine, ClassicDtw, PairwiseDistance};
use warpband_io::{ResultWriter, SequenceReader};

/// Path to the test fixture directory.
fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn matrix_round_trip_full_band() {
    // 1. Read ragged CSV
    let dataset = SequenceReader::new(&fixture_path("ragged_5.csv"))
        .read()
        .expect("fixture should parse");
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.length_range(), Some((2, 5)));

    // 2. Pairwise DTW at full band
    let band = BandConfig::full();
    let engine = BandedDistanceEngine::dtw(band);
    let matrix = engine.pairwise(&dataset.sequences);

    // 3. Write JSON artifact into a directory that does not exist yet
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results").join("matrix.json");
    let writer = ResultWriter::new(&out).unwrap();
    writer
        .write_matrix(&dataset.ids, &matrix, band, engine.name())
        .unwrap();

    // 4. Deserialize back and verify
    let content = read_json(&out);
    assert_eq!(content["variant"], "dtw");
    assert_eq!(content["band_fraction"], 1.0);
    assert_eq!(content["n_sequences"], 5);
    assert_eq!(content["ids"][3], "short");

    // ramp_long and spike are more than twice as long as short: even the full
    // band resolved from short's length excludes their terminal cells
    assert_eq!(content["unreachable_pairs"], 2);
    assert!(content["distances"][2][3].is_null());
    assert!(content["distances"][4][3].is_null());
    let short_to_spike = content["distances"][3][4].as_f64().unwrap();
    assert!((short_to_spike - 12.0_f64.sqrt()).abs() < 1e-10);

    let flat_to_ramp = content["distances"][0][1].as_f64().unwrap();
    assert!((flat_to_ramp - 14.0_f64.sqrt()).abs() < 1e-10);
    assert_eq!(content["distances"][1][1], 0.0);

    assert_eq!(content["nearest"][0]["id"], "spike");
    assert_eq!(content["nearest"][0]["distance"], 1.0);
    assert_eq!(content["nearest"][3]["id"], "ramp");
}

#[test]
fn narrow_band_leaves_unequal_lengths_unreachable() {
    let dataset = SequenceReader::new(&fixture_path("ragged_5.csv"))
        .read()
        .unwrap();
    let band = BandConfig::default();
    let matrix = BandedDistanceEngine::dtw(band).pairwise(&dataset.sequences);

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("narrow.json");
    ResultWriter::new(&out)
        .unwrap()
        .write_matrix(&dataset.ids, &matrix, band, "dtw")
        .unwrap();

    let content = read_json(&out);
    assert_eq!(content["band_fraction"], 0.1);
    // length 3 vs 5 and 2 vs 5 differ by more than the resolved half-width
    assert_eq!(content["unreachable_pairs"], 12);
    let ramp_long_to_spike = content["distances"][2][4].as_f64().unwrap();
    assert!(ramp_long_to_spike.is_finite());
}

#[test]
fn classic_variant_name_is_recorded() {
    let dataset = SequenceReader::new(&fixture_path("ragged_5.csv"))
        .read()
        .unwrap();
    let engine = BandedDistanceEngine::new(BandConfig::full(), ClassicDtw);
    let matrix = engine.pairwise(&dataset.sequences);

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("classic.json");
    ResultWriter::new(&out)
        .unwrap()
        .write_matrix(&dataset.ids, &matrix, engine.band(), engine.name())
        .unwrap();

    assert_eq!(read_json(&out)["variant"], "classic-dtw");
}

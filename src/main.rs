use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use warpband_dtw::{
    BandConfig, BandedDistanceEngine, ClassicDtw, Dtw, PairwiseDistance, SequenceView,
};
use warpband_io::{ResultWriter, SequenceReader};

#[derive(Parser)]
#[command(name = "warpband")]
#[command(about = "Banded Dynamic Time Warping distances between numeric sequences")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Number of threads for parallel computation (defaults to all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,
}

/// Shared distance parameters.
#[derive(Args, Debug, Clone)]
struct DistanceArgs {
    /// Band half-width as a fraction of the reference (second) sequence length, in [0, 1]
    #[arg(long, default_value_t = BandConfig::DEFAULT_FRACTION)]
    band: f64,

    /// Predecessor rule: "dtw" (ordered tie-break) or "classic" (true minimum)
    #[arg(long, value_enum, default_value_t = Variant::Dtw)]
    variant: Variant,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Variant {
    Dtw,
    Classic,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the distance from one sequence to a reference sequence
    Distance {
        /// First sequence, comma-separated values
        #[arg(long, allow_hyphen_values = true)]
        a: String,

        /// Reference sequence, comma-separated values
        #[arg(long, allow_hyphen_values = true)]
        b: String,

        #[command(flatten)]
        params: DistanceArgs,
    },

    /// Compute the dense pairwise distance matrix of a CSV dataset
    Pairwise {
        /// Path to the input CSV file (id,v0,v1,... per row)
        #[arg(long)]
        data: PathBuf,

        /// Path of the JSON file to write
        #[arg(long)]
        output: PathBuf,

        #[command(flatten)]
        params: DistanceArgs,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct DistanceOutput {
    variant: &'static str,
    band_fraction: f64,
    half_width: usize,
    len_a: usize,
    len_b: usize,
    /// `None` when the band admits no alignment.
    distance: Option<f64>,
}

#[derive(Serialize)]
struct PairwiseOutput {
    variant: &'static str,
    band_fraction: f64,
    n_sequences: usize,
    unreachable_pairs: usize,
    max_asymmetry: Option<f64>,
    output: PathBuf,
}

fn build_metric(params: &DistanceArgs) -> Result<(BandConfig, Box<dyn PairwiseDistance>)> {
    let band = BandConfig::new(params.band).context("invalid --band")?;
    let metric: Box<dyn PairwiseDistance> = match params.variant {
        Variant::Dtw => Box::new(BandedDistanceEngine::new(band, Dtw)),
        Variant::Classic => Box::new(BandedDistanceEngine::new(band, ClassicDtw)),
    };
    Ok((band, metric))
}

fn parse_values(raw: &str, flag: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("{flag}: cannot parse \"{s}\" as a number"))
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Configure Rayon thread pool
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
        info!(threads, "thread pool configured");
    }

    match cli.command {
        Command::Distance { a, b, params } => {
            let (band, metric) = build_metric(&params)?;
            let a = parse_values(&a, "--a")?;
            let b = parse_values(&b, "--b")?;
            let a_view = SequenceView::new(&a).context("invalid --a sequence")?;
            let b_view = SequenceView::new(&b).context("invalid --b sequence")?;

            let distance = metric.distance(a_view, b_view);
            info!(%distance, variant = metric.name(), "distance computed");

            let output = DistanceOutput {
                variant: metric.name(),
                band_fraction: band.fraction(),
                half_width: band.half_width(b.len()),
                len_a: a.len(),
                len_b: b.len(),
                distance: distance.finite(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Pairwise {
            data,
            output,
            params,
        } => {
            let (band, metric) = build_metric(&params)?;

            // 1. Read dataset
            let dataset = SequenceReader::new(&data)
                .read()
                .context("failed to read input CSV")?;
            info!(n_sequences = dataset.len(), "dataset loaded");

            // 2. Compute matrix
            let matrix = metric.pairwise(&dataset.sequences);
            let asymmetry = matrix.max_asymmetry();
            info!(
                unreachable = matrix.unreachable_count(),
                max_asymmetry = asymmetry,
                "pairwise matrix computed"
            );

            // 3. Write JSON artifact
            let writer = ResultWriter::new(&output)?;
            writer
                .write_matrix(&dataset.ids, &matrix, band, metric.name())
                .context("failed to write distance matrix")?;

            // 4. Print summary
            let summary = PairwiseOutput {
                variant: metric.name(),
                band_fraction: band.fraction(),
                n_sequences: dataset.len(),
                unreachable_pairs: matrix.unreachable_count(),
                max_asymmetry: asymmetry.is_finite().then_some(asymmetry),
                output,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

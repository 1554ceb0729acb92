//! Command-line pipeline: arguments in, report out

use crate::clustering::KMeansPlusPlus;
use crate::config::PositionalArgs;
use crate::error::Result;
use crate::io::{format_report, load_joined};
use tracing::debug;

/// Run `K [MAX_ITER] EPS FILE_A FILE_B` and return the report text
///
/// The argument count is checked before any file is read; K, MAX_ITER and
/// EPS are checked after loading because K is bounded by the number of
/// joined points.
pub fn execute(args: &[String], seed: u64) -> Result<String> {
    let positional = PositionalArgs::from_args(args)?;
    let dataset = load_joined(&positional.file_a, &positional.file_b)?;
    debug!(
        points = dataset.len(),
        dimension = dataset.dimension(),
        "joined dataset"
    );

    let params = positional.parameters(dataset.len())?;
    let clustering = KMeansPlusPlus::new(params).with_seed(seed).run(&dataset);

    Ok(format_report(&clustering.indices, &clustering.centroids))
}

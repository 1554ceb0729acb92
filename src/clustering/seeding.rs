//! k-means++ initialization
//!
//! Picks initial centroids that are far apart: after a uniform first pick,
//! each further centroid is drawn with probability proportional to the
//! distance from a point to its nearest already-chosen centroid.

use crate::dataset::{Dataset, Point};
use crate::distance::{distance, min_distances_parallel};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Initial centroids and the dataset indices they were copied from
#[derive(Debug, Clone, PartialEq)]
pub struct Seeding {
    /// Chosen centroids, in selection order
    pub centroids: Vec<Point>,
    /// Dataset index of each centroid
    pub indices: Vec<usize>,
}

/// Select `k` initial centroids with k-means++
///
/// Draws come from `rng` only, so a seeded generator yields the same
/// selection on every run. The weights are plain Euclidean distances (not
/// squared), and a point that is already a centroid stays eligible. When
/// every point coincides with a chosen centroid the weights are all zero and
/// the pick falls back to a uniform draw. Distances that overflow to
/// infinity outweigh every finite one, so the pick is uniform among them.
///
/// # Panics
/// Panics unless `1 <= k <= dataset.len()`.
pub fn init_plusplus<R: Rng + ?Sized>(dataset: &Dataset, k: usize, rng: &mut R) -> Seeding {
    let n = dataset.len();
    assert!(k > 0 && k <= n, "k must be between 1 and number of points");

    let points = dataset.points();
    let mut centroids: Vec<Point> = Vec::with_capacity(k);
    let mut indices = Vec::with_capacity(k);

    let first = rng.gen_range(0..n);
    centroids.push(points[first].clone());
    indices.push(first);
    debug!(index = first, "k-means++ picked first centroid");

    if k == 1 {
        return Seeding { centroids, indices };
    }

    // Nearest-centroid distance per point, refreshed against each new pick
    let mut min_dists = min_distances_parallel(points, &centroids);

    while centroids.len() < k {
        let next = draw_weighted(&min_dists, rng);

        let chosen = &points[next];
        min_dists
            .par_iter_mut()
            .zip(points.par_iter())
            .for_each(|(d, p)| {
                let candidate = distance(p, chosen);
                if candidate < *d {
                    *d = candidate;
                }
            });

        centroids.push(chosen.clone());
        indices.push(next);
        debug!(index = next, picked = centroids.len(), "k-means++ picked centroid");
    }

    Seeding { centroids, indices }
}

/// Draw an index with probability proportional to `weights`
///
/// `WeightedIndex` panics on a non-finite total, so infinite weights and an
/// overflowing sum are handled before it is built.
fn draw_weighted<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    let infinite: Vec<usize> = weights
        .iter()
        .enumerate()
        .filter(|(_, w)| w.is_infinite() && w.is_sign_positive())
        .map(|(i, _)| i)
        .collect();
    if !infinite.is_empty() {
        debug!(count = infinite.len(), "k-means++ drawing among infinite distances");
        return infinite[rng.gen_range(0..infinite.len())];
    }

    let total: f64 = weights.iter().sum();
    let weighted = if total.is_finite() {
        WeightedIndex::new(weights)
    } else {
        let max = weights.iter().cloned().fold(0.0, f64::max);
        WeightedIndex::new(weights.iter().map(|w| w / max))
    };

    match weighted {
        Ok(weighted) => weighted.sample(rng),
        Err(err) => {
            warn!(%err, "k-means++ weights unusable, drawing uniformly");
            rng.gen_range(0..weights.len())
        }
    }
}

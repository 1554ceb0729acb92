//! Distance calculation
//!
//! Clustering is Euclidean only. The helpers here are shared by the
//! k-means++ seeder and the Lloyd refinement loop.

pub mod scalar;

use rayon::prelude::*;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    scalar::l2_scalar(a, b)
}

/// Find the nearest centroid for a point
///
/// Returns `(index, distance)`. Ties resolve to the lowest centroid index.
///
/// # Panics
/// Panics if `centroids` is empty.
#[inline]
pub fn nearest(point: &[f64], centroids: &[Vec<f64>]) -> (usize, f64) {
    assert!(!centroids.is_empty(), "Cannot search an empty centroid set");

    let mut best_idx = 0;
    let mut best_dist = scalar::l2_squared_scalar(point, &centroids[0]);
    for (i, c) in centroids.iter().enumerate().skip(1) {
        let d = scalar::l2_squared_scalar(point, c);
        // strict: an equal distance keeps the earlier index
        if d < best_dist {
            best_idx = i;
            best_dist = d;
        }
    }

    (best_idx, best_dist.sqrt())
}

/// Distance from every point to its nearest centroid
pub fn min_distances(points: &[Vec<f64>], centroids: &[Vec<f64>]) -> Vec<f64> {
    points.iter().map(|p| nearest(p, centroids).1).collect()
}

/// Parallel version of [`min_distances`] using rayon
///
/// Output order matches `points`, so results are identical to the
/// sequential version.
pub fn min_distances_parallel(points: &[Vec<f64>], centroids: &[Vec<f64>]) -> Vec<f64> {
    points
        .par_iter()
        .map(|p| nearest(p, centroids).1)
        .collect()
}

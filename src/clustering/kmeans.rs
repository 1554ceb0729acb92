//! K-means clustering implementation
//!
//! Lloyd's iteration: assign every point to its nearest centroid, move each
//! centroid to the mean of its points, repeat until no centroid moves more
//! than epsilon or the iteration cap is reached.

use crate::dataset::{Dataset, Point};
use crate::distance::{distance, nearest};
use rayon::prelude::*;
use tracing::{debug, info};

/// K-means clustering result
#[derive(Debug, Clone, PartialEq)]
pub struct KMeans {
    /// Cluster centroids
    pub centroids: Vec<Point>,
    /// Number of clusters
    pub k: usize,
    /// Dimensionality
    pub dimension: usize,
    /// Assignment/update cycles performed
    pub iterations: usize,
    /// Whether the run stopped because every centroid moved at most epsilon
    pub converged: bool,
}

/// Assignment of points to clusters
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAssignment {
    /// Which cluster each point belongs to (index)
    pub assignments: Vec<usize>,
    /// Distance from each point to its assigned centroid
    pub distances: Vec<f64>,
}

impl KMeans {
    /// Refine `initial_centroids` against `dataset`
    ///
    /// Runs at most `max_iterations` cycles. A centroid that ends up with no
    /// points keeps its previous position. Both convergence and the
    /// iteration cap are normal stops; the current centroids are returned
    /// either way.
    ///
    /// # Panics
    /// Panics if `initial_centroids` is empty or any centroid's
    /// dimensionality differs from the dataset's.
    pub fn fit(
        dataset: &Dataset,
        initial_centroids: Vec<Point>,
        max_iterations: usize,
        epsilon: f64,
    ) -> Self {
        assert!(!initial_centroids.is_empty(), "Cannot fit with no centroids");
        let dimension = dataset.dimension();
        assert!(
            initial_centroids.iter().all(|c| c.len() == dimension),
            "Centroid dimensions must match the dataset"
        );

        let k = initial_centroids.len();
        let mut centroids = initial_centroids;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < max_iterations {
            let assignment = assign(dataset, &centroids);
            let next = update_centroids(dataset, &assignment, &centroids);

            let shifts: Vec<f64> = centroids
                .iter()
                .zip(next.iter())
                .map(|(old, new)| distance(old, new))
                .collect();
            let max_shift = shifts.iter().cloned().fold(0.0, f64::max);

            centroids = next;
            iterations += 1;
            debug!(iteration = iterations, max_shift, "lloyd iteration");

            if shifts.iter().all(|&s| s <= epsilon) {
                converged = true;
                break;
            }
        }

        info!(k, iterations, converged, "k-means refinement finished");

        Self {
            centroids,
            k,
            dimension,
            iterations,
            converged,
        }
    }

    /// Assign points to nearest centroids
    pub fn assign(&self, dataset: &Dataset) -> ClusterAssignment {
        assign(dataset, &self.centroids)
    }

    /// Find the nearest centroid for a query point
    pub fn nearest_centroid(&self, query: &[f64]) -> (usize, f64) {
        nearest(query, &self.centroids)
    }
}

/// Assign every point to its nearest centroid, ties to the lowest index
pub fn assign(dataset: &Dataset, centroids: &[Point]) -> ClusterAssignment {
    let (assignments, distances): (Vec<_>, Vec<_>) = dataset
        .points()
        .par_iter()
        .map(|p| nearest(p, centroids))
        .unzip();

    ClusterAssignment {
        assignments,
        distances,
    }
}

/// Recompute centroids as the mean of their assigned points
///
/// Sums are accumulated sequentially in dataset order so the result does not
/// depend on thread scheduling.
fn update_centroids(
    dataset: &Dataset,
    assignment: &ClusterAssignment,
    current: &[Point],
) -> Vec<Point> {
    let k = current.len();
    let mut new_centroids = vec![vec![0.0; dataset.dimension()]; k];
    let mut counts = vec![0usize; k];

    for (point, &cluster_id) in dataset.points().iter().zip(assignment.assignments.iter()) {
        for (acc, &val) in new_centroids[cluster_id].iter_mut().zip(point.iter()) {
            *acc += val;
        }
        counts[cluster_id] += 1;
    }

    for (i, (centroid, &count)) in new_centroids.iter_mut().zip(counts.iter()).enumerate() {
        if count == 0 {
            // Empty cluster stays where it was
            centroid.copy_from_slice(&current[i]);
        } else {
            for val in centroid.iter_mut() {
                *val /= count as f64;
            }
        }
    }

    new_centroids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_corners() -> Dataset {
        Dataset::new(vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 0.0],
            vec![10.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_kmeans_simple() {
        let ds = four_corners();
        let kmeans = KMeans::fit(&ds, vec![vec![0.0, 0.0], vec![10.0, 1.0]], 300, 1e-4);

        assert_eq!(kmeans.k, 2);
        assert!(kmeans.converged);
        assert_eq!(kmeans.centroids[0], vec![0.0, 0.5]);
        assert_eq!(kmeans.centroids[1], vec![10.0, 0.5]);
    }

    #[test]
    fn test_empty_cluster_keeps_centroid() {
        let ds = four_corners();
        let far = vec![1000.0, 1000.0];
        let kmeans = KMeans::fit(&ds, vec![vec![5.0, 0.5], far.clone()], 10, 0.0);

        assert_eq!(kmeans.centroids[0], vec![5.0, 0.5]);
        assert_eq!(kmeans.centroids[1], far);
        assert!(kmeans.converged);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let ds = Dataset::new(vec![vec![0.0], vec![10.0]]).unwrap();
        // Both centroids are equidistant from every point
        let assignment = assign(&ds, &[vec![5.0], vec![5.0]]);
        assert_eq!(assignment.assignments, vec![0, 0]);
    }

    #[test]
    fn test_respects_iteration_cap() {
        let ds = Dataset::new((0..50).map(|i| vec![(i as f64).powi(2)]).collect()).unwrap();
        let kmeans = KMeans::fit(&ds, vec![vec![0.0], vec![1.0], vec![4.0]], 2, 0.0);

        assert_eq!(kmeans.iterations, 2);
        assert!(!kmeans.converged);
    }

    #[test]
    fn test_zero_iterations_returns_initial() {
        let ds = four_corners();
        let initial = vec![vec![1.0, 1.0], vec![2.0, 2.0]];
        let kmeans = KMeans::fit(&ds, initial.clone(), 0, 1e-4);

        assert_eq!(kmeans.centroids, initial);
        assert_eq!(kmeans.iterations, 0);
        assert!(!kmeans.converged);
    }

    #[test]
    fn test_negative_epsilon_runs_to_cap() {
        let ds = four_corners();
        let kmeans = KMeans::fit(&ds, vec![vec![0.0, 0.0], vec![10.0, 0.0]], 7, -1.0);

        assert_eq!(kmeans.iterations, 7);
        assert!(!kmeans.converged);
    }

    #[test]
    fn test_nearest_centroid() {
        let ds = four_corners();
        let kmeans = KMeans::fit(&ds, vec![vec![0.0, 0.0], vec![10.0, 1.0]], 300, 1e-4);

        let (nearest, dist) = kmeans.nearest_centroid(&[1.0, 0.5]);
        assert_eq!(nearest, 0);
        assert!((dist - 1.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "Centroid dimensions")]
    fn test_dimension_mismatch_panics() {
        let ds = four_corners();
        KMeans::fit(&ds, vec![vec![0.0, 0.0, 0.0]], 10, 1e-4);
    }
}

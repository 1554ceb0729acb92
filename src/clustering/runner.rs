//! Seeding followed by refinement

use super::kmeans::KMeans;
use super::seeding::init_plusplus;
use crate::config::Parameters;
use crate::dataset::{Dataset, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Outcome of a full k-means++ run
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Dataset indices picked by the seeder, in selection order
    pub indices: Vec<usize>,
    /// Final centroids; centroid `i` started from `indices[i]`
    pub centroids: Vec<Point>,
    pub iterations: usize,
    pub converged: bool,
}

/// K-means with k-means++ seeding
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansPlusPlus {
    params: Parameters,
    seed: u64,
}

impl KMeansPlusPlus {
    /// Runner with random seed 0
    pub fn new(params: Parameters) -> Self {
        Self { params, seed: 0 }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run with a generator freshly seeded from the configured seed
    pub fn run(&self, dataset: &Dataset) -> Clustering {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.run_with_rng(dataset, &mut rng)
    }

    /// Run drawing from a caller-supplied random stream
    ///
    /// # Panics
    /// Panics unless `1 <= k <= dataset.len()`.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, dataset: &Dataset, rng: &mut R) -> Clustering {
        let seeding = init_plusplus(dataset, self.params.k, rng);
        let kmeans = KMeans::fit(
            dataset,
            seeding.centroids,
            self.params.max_iterations,
            self.params.epsilon,
        );

        info!(
            points = dataset.len(),
            dimension = dataset.dimension(),
            k = self.params.k,
            iterations = kmeans.iterations,
            converged = kmeans.converged,
            "k-means++ run complete"
        );

        Clustering {
            indices: seeding.indices,
            centroids: kmeans.centroids,
            iterations: kmeans.iterations,
            converged: kmeans.converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_is_reproducible() {
        let ds = Dataset::new((0..30).map(|i| vec![(i % 5) as f64, (i / 5) as f64]).collect())
            .unwrap();
        let runner = KMeansPlusPlus::new(Parameters::new(4, 1e-6)).with_seed(9);

        assert_eq!(runner.run(&ds), runner.run(&ds));
    }

    #[test]
    fn test_run_shapes() {
        let ds = Dataset::new((0..12).map(|i| vec![i as f64, 0.0, -(i as f64)]).collect())
            .unwrap();
        let out = KMeansPlusPlus::new(Parameters::new(3, 1e-4).with_max_iterations(50)).run(&ds);

        assert_eq!(out.indices.len(), 3);
        assert_eq!(out.centroids.len(), 3);
        assert!(out.centroids.iter().all(|c| c.len() == 3));
        assert!(out.iterations <= 50);
    }
}

//! kmeanspp - K-means clustering with k-means++ seeding
//!
//! The engine is [`clustering::init_plusplus`] followed by
//! [`clustering::KMeans::fit`]; [`clustering::KMeansPlusPlus`] chains them.
//! The `io`, `config` and `cli` modules load keyed CSV tables, validate
//! command-line parameters and print results.

pub mod cli;
pub mod clustering;
pub mod config;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod io;

// Re-export commonly used types
pub use clustering::{
    init_plusplus, ClusterAssignment, Clustering, KMeans, KMeansPlusPlus, Seeding,
};
pub use config::{Parameters, DEFAULT_MAX_ITERATIONS};
pub use dataset::{Dataset, DatasetError, Point};
pub use distance::{distance, min_distances, min_distances_parallel, nearest};
pub use error::Error;

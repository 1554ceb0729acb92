//! Clustering engine
//!
//! Provides:
//! - k-means++ seeding
//! - Lloyd's iteration refinement
//! - a runner that chains the two under one seeded random stream

pub mod kmeans;
pub mod runner;
pub mod seeding;

pub use kmeans::{assign, ClusterAssignment, KMeans};
pub use runner::{Clustering, KMeansPlusPlus};
pub use seeding::{init_plusplus, Seeding};

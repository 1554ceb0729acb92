//! In-memory point set handed to the clustering engine

use thiserror::Error;

/// A single point; every point in a [`Dataset`] has the same length
pub type Point = Vec<f64>;

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("dataset contains no points")]
    Empty,
    #[error("points must have at least one dimension")]
    ZeroDimension,
    #[error("point {index} has {found} dimensions, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

/// Ordered, read-only collection of points with a fixed dimensionality
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<Point>,
    dimension: usize,
}

impl Dataset {
    /// Build a dataset, checking that all points share one dimensionality
    pub fn new(points: Vec<Point>) -> Result<Self, DatasetError> {
        let dimension = points.first().ok_or(DatasetError::Empty)?.len();
        if dimension == 0 {
            return Err(DatasetError::ZeroDimension);
        }

        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| p.len() != dimension)
        {
            return Err(DatasetError::DimensionMismatch {
                index,
                expected: dimension,
                found: p.len(),
            });
        }

        Ok(Self { points, dimension })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn get(&self, idx: usize) -> &[f64] {
        &self.points[idx]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

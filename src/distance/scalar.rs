//! Scalar distance kernels

/// Euclidean (L2) distance squared between two points
///
/// Squared distance is enough for nearest-centroid comparisons, since sqrt
/// is monotonic.
#[inline]
pub fn l2_squared_scalar(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Point dimensions must match");

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// Euclidean (L2) distance between two points
#[inline]
pub fn l2_scalar(a: &[f64], b: &[f64]) -> f64 {
    l2_squared_scalar(a, b).sqrt()
}

//! Run parameters and their command-line validation

use std::path::PathBuf;
use thiserror::Error;

/// Iteration cap used when none is given
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// Exclusive upper bound for a user-supplied iteration cap
pub const MAX_ITERATIONS_LIMIT: usize = 1000;

/// Message shown for any failure without a dedicated message
pub const GENERIC_FAILURE: &str = "An Error Has Occurred";

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("expected `K [MAX_ITER] EPS FILE_A FILE_B`, got {0} positional arguments")]
    InvalidArgumentCount(usize),
    #[error("invalid number of clusters `{value}` for {points} points")]
    InvalidClusterCount { value: String, points: usize },
    #[error("invalid maximum iteration `{0}`")]
    InvalidMaxIterations(String),
    #[error("invalid epsilon `{0}`")]
    InvalidEpsilon(String),
}

impl ParameterError {
    /// The fixed line printed for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            ParameterError::InvalidClusterCount { .. } => "Invalid number of clusters!",
            ParameterError::InvalidMaxIterations(_) => "Invalid maximum iteration!",
            ParameterError::InvalidArgumentCount(_) | ParameterError::InvalidEpsilon(_) => {
                GENERIC_FAILURE
            }
        }
    }
}

/// Clustering parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    /// Number of clusters
    pub k: usize,
    /// Maximum assignment/update cycles
    pub max_iterations: usize,
    /// Convergence threshold on per-centroid displacement
    pub epsilon: f64,
}

impl Parameters {
    pub fn new(k: usize, epsilon: f64) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            epsilon,
        }
    }

    /// Set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Parse and validate raw argument strings against a dataset of `n` points
    ///
    /// Checks run in order K, max_iterations, epsilon, so the first bad value
    /// decides the error.
    pub fn parse(
        k: &str,
        max_iterations: Option<&str>,
        epsilon: &str,
        n: usize,
    ) -> Result<Self, ParameterError> {
        let k_value = parse_digits(k)
            .filter(|&v| 1 < v && v < n)
            .ok_or_else(|| ParameterError::InvalidClusterCount {
                value: k.to_string(),
                points: n,
            })?;

        let max_iterations = match max_iterations {
            None => DEFAULT_MAX_ITERATIONS,
            Some(raw) => parse_digits(raw)
                .filter(|&v| 1 < v && v < MAX_ITERATIONS_LIMIT)
                .ok_or_else(|| ParameterError::InvalidMaxIterations(raw.to_string()))?,
        };

        let epsilon = epsilon
            .trim()
            .parse::<f64>()
            .map_err(|_| ParameterError::InvalidEpsilon(epsilon.to_string()))?;

        Ok(Self {
            k: k_value,
            max_iterations,
            epsilon,
        })
    }
}

/// Only plain ASCII digits count as an integer: no sign, no spaces
fn parse_digits(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Positional arguments `K [MAX_ITER] EPS FILE_A FILE_B`, split but not yet
/// validated
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalArgs {
    pub k: String,
    pub max_iterations: Option<String>,
    pub epsilon: String,
    pub file_a: PathBuf,
    pub file_b: PathBuf,
}

impl PositionalArgs {
    pub fn from_args(args: &[String]) -> Result<Self, ParameterError> {
        match args {
            [k, epsilon, file_a, file_b] => Ok(Self {
                k: k.clone(),
                max_iterations: None,
                epsilon: epsilon.clone(),
                file_a: PathBuf::from(file_a),
                file_b: PathBuf::from(file_b),
            }),
            [k, max_iterations, epsilon, file_a, file_b] => Ok(Self {
                k: k.clone(),
                max_iterations: Some(max_iterations.clone()),
                epsilon: epsilon.clone(),
                file_a: PathBuf::from(file_a),
                file_b: PathBuf::from(file_b),
            }),
            _ => Err(ParameterError::InvalidArgumentCount(args.len())),
        }
    }

    /// Validate the numeric arguments for a dataset of `n` points
    pub fn parameters(&self, n: usize) -> Result<Parameters, ParameterError> {
        Parameters::parse(&self.k, self.max_iterations.as_deref(), &self.epsilon, n)
    }
}

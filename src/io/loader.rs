//! Loading a dataset from two keyed CSV tables
//!
//! Each table is header-less, comma separated, and numeric. Column 0 is a
//! key; the tables are inner-joined on it, sorted by key ascending, and the
//! key is dropped. A joined point is the remaining columns of the first table
//! followed by the remaining columns of the second.

use crate::dataset::{Dataset, DatasetError, Point};
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}, column {column}: `{value}` is not a number")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("row {row} has no key column")]
    MissingKey { row: usize },
    #[error("tables share no keys")]
    EmptyJoin,
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// One parsed row: key plus the remaining values
type Row = (f64, Vec<f64>);

/// Read both files and join them into a dataset
pub fn load_joined<P: AsRef<Path>, Q: AsRef<Path>>(
    path_a: P,
    path_b: Q,
) -> Result<Dataset, LoadError> {
    let a = read_table(open(path_a.as_ref())?)?;
    let b = read_table(open(path_b.as_ref())?)?;
    debug!(
        rows_a = a.len(),
        rows_b = b.len(),
        "loaded input tables"
    );
    into_dataset(join_rows(a, b))
}

/// Join two CSV sources already open as readers
pub fn join_readers<A: Read, B: Read>(a: A, b: B) -> Result<Dataset, LoadError> {
    let a = read_table(a)?;
    let b = read_table(b)?;
    into_dataset(join_rows(a, b))
}

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|e| LoadError::Open {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })
}

fn read_table<R: Read>(reader: R) -> Result<Vec<Row>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let mut values = Vec::with_capacity(record.len());
        for (column, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|_| LoadError::Parse {
                row,
                column,
                value: field.to_string(),
            })?;
            values.push(value);
        }

        if values.is_empty() {
            return Err(LoadError::MissingKey { row });
        }
        let key = values.remove(0);
        rows.push((key, values));
    }

    Ok(rows)
}

/// `-0.0` and `0.0` must join as the same key
#[inline]
fn key_bits(key: f64) -> u64 {
    if key == 0.0 {
        0.0f64.to_bits()
    } else {
        key.to_bits()
    }
}

/// Inner join on key, stable-sorted by key, key dropped
fn join_rows(a: Vec<Row>, b: Vec<Row>) -> Vec<Point> {
    let mut by_key: HashMap<u64, Vec<usize>> = HashMap::new();
    for (i, (key, _)) in b.iter().enumerate() {
        by_key.entry(key_bits(*key)).or_default().push(i);
    }

    let mut joined: Vec<(f64, Point)> = Vec::new();
    for (key, left) in &a {
        let Some(matches) = by_key.get(&key_bits(*key)) else {
            continue;
        };
        for &j in matches {
            let right = &b[j].1;
            let mut point = Vec::with_capacity(left.len() + right.len());
            point.extend_from_slice(left);
            point.extend_from_slice(right);
            joined.push((*key, point));
        }
    }

    joined.sort_by(|x, y| x.0.total_cmp(&y.0));
    joined.into_iter().map(|(_, p)| p).collect()
}

fn into_dataset(points: Vec<Point>) -> Result<Dataset, LoadError> {
    if points.is_empty() {
        return Err(LoadError::EmptyJoin);
    }
    Ok(Dataset::new(points)?)
}

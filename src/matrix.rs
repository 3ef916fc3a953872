//! Square travel-time matrix in seconds.

use crate::clock::Minutes;
use crate::error::{Error, Result};

/// Travel seconds between every ordered pair of stops.
///
/// Row is the origin index, column the destination index, both aligned to
/// the order of the stops the matrix was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<u32>>,
}

impl DistanceMatrix {
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self> {
        let expected = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, cells)| cells.len() != expected) {
            return Err(Error::NonSquareMatrix {
                row,
                len: cells.len(),
                expected,
            });
        }
        Ok(Self { rows })
    }

    /// Build an `n x n` matrix from a function of `(from, to)`.
    pub fn from_fn(n: usize, mut seconds: impl FnMut(usize, usize) -> u32) -> Self {
        let rows = (0..n)
            .map(|from| (0..n).map(|to| seconds(from, to)).collect())
            .collect();
        Self { rows }
    }

    /// Number of stops covered.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn seconds(&self, from: usize, to: usize) -> Option<u32> {
        self.rows.get(from)?.get(to).copied()
    }

    /// Travel time in whole minutes, rounded up.
    pub fn minutes(&self, from: usize, to: usize) -> Option<Minutes> {
        self.seconds(from, to).map(|secs| secs.div_ceil(60))
    }

    /// Fail unless the matrix covers exactly `expected` stops.
    pub fn ensure_len(&self, expected: usize) -> Result<()> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(Error::MatrixSize {
                expected,
                actual: self.len(),
            })
        }
    }
}

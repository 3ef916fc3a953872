//! Crate error type.
//!
//! Sequencing itself never fails; errors only come from the surfaces around
//! it (matrix construction, the OSRM client, route-config resolution).

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("distance matrix covers {actual} locations, expected {expected}")]
    MatrixSize { expected: usize, actual: usize },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("OSRM returned {code}: {message}")]
    Osrm { code: String, message: String },
    #[error("unknown location id {0:?}")]
    UnknownLocation(String),
    #[error("{policy} is not supported in {mode} mode")]
    UnsupportedPolicy {
        policy: &'static str,
        mode: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

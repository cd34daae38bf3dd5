//! Error types for filesum.

use std::io;

use filesum_hash::UnsupportedAlgorithm;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    /// Filesystem errors propagate unwrapped so callers can still observe
    /// the original [`io::ErrorKind`] (`NotFound` in particular).
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnsupportedAlgorithm),

    #[error("digest mismatch: expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },
}

pub type Result<T> = std::result::Result<T, DigestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_kind_stays_observable() {
        let err = DigestError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        match err {
            DigestError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn mismatch_message_names_both_digests() {
        let err = DigestError::Mismatch {
            expected: "aa".to_string(),
            actual: "bb".to_string(),
        };
        assert_eq!(err.to_string(), "digest mismatch: expected aa, got bb");
    }
}

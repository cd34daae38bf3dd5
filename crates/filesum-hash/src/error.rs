//! Error types for filesum-hash.

use thiserror::Error;

/// The selector named a hash function this crate does not provide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported hash algorithm: {0}")]
pub struct UnsupportedAlgorithm(pub String);

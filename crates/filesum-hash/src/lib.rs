//! Algorithm selection and incremental hashing primitives.
//!
//! Provides the runtime-selectable hash accumulators behind `filesum`
//! without enforcing any file or stream handling policy. Algorithms are
//! named by string selectors so callers can thread user-supplied
//! configuration straight through; an unrecognized name surfaces as
//! [`UnsupportedAlgorithm`] when the selector is resolved, not earlier.
//!
//! # Example
//!
//! ```
//! use filesum_hash::Algorithm;
//!
//! let algorithm: Algorithm = "sha1".parse().unwrap();
//! let mut hasher = algorithm.hasher();
//! hasher.update(b"abc");
//! assert_eq!(hex::encode(hasher.finalize()), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```

pub use self::algorithm::Algorithm;
pub use self::error::UnsupportedAlgorithm;
pub use self::hasher::{DigestHasher, Hasher};

mod algorithm;
mod error;
mod hasher;

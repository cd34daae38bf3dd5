//! File digest computation and streaming pass-through verification.
//!
//! # Architecture
//!
//! This crate is plumbing over the hash primitives in `filesum-hash`:
//! - [`DigestOptions`] - algorithm selection, resolved when an operation runs
//! - [`get`] / [`get_sync`] - stream a file through the selected hash and
//!   return the lowercase hex digest
//! - [`check`] / [`check_sync`] - compute as `get`, then compare exactly
//!   against an expected digest
//! - [`VerifyingReader`] / [`AsyncVerifyingReader`] / [`VerifyingStream`] -
//!   pass-through conduits that forward every byte unchanged while hashing,
//!   then fail at end-of-input on mismatch
//!
//! # Key properties
//!
//! - **Single-Pass**: files and streams are hashed in fixed-size chunks,
//!   never buffered whole in memory
//! - **Forward everything, fail at the end**: a mismatching conduit still
//!   delivers the full payload downstream before surfacing the error
//! - **Mechanism-Only**: no retries, no caching; filesystem errors propagate
//!   with their original [`io::ErrorKind`](std::io::ErrorKind)

pub use filesum_hash::{Algorithm, DigestHasher, Hasher, UnsupportedAlgorithm};

pub use self::digest::{check, check_sync, get, get_sync};
pub use self::error::{DigestError, Result};
pub use self::options::DigestOptions;
pub use self::verify::{AsyncVerifyingReader, VerifyingReader, VerifyingStream};

mod digest;
mod error;
mod options;
mod verify;

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithm::Algorithm;

/// Incremental hash accumulator.
///
/// Object-safe so the algorithm can be picked at runtime from a selector
/// string; `finalize` consumes the accumulator, making every verification
/// one-shot.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Adapter implementing [`Hasher`] for any RustCrypto digest.
pub struct DigestHasher<D: Digest + Send>(D);

impl<D: Digest + Send> DigestHasher<D> {
    pub fn new() -> Self {
        Self(D::new())
    }
}

impl<D: Digest + Send> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}

impl Algorithm {
    /// Construct a fresh accumulator for this algorithm.
    pub fn hasher(&self) -> Box<dyn Hasher> {
        match self {
            Algorithm::Sha1 => Box::new(DigestHasher::<Sha1>::new()),
            Algorithm::Md5 => Box::new(DigestHasher::<Md5>::new()),
            Algorithm::Sha256 => Box::new(DigestHasher::<Sha256>::new()),
            Algorithm::Sha384 => Box::new(DigestHasher::<Sha384>::new()),
            Algorithm::Sha512 => Box::new(DigestHasher::<Sha512>::new()),
        }
    }
}

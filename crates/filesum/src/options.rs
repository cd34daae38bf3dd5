use filesum_hash::{Algorithm, UnsupportedAlgorithm};

/// Options accepted by every digest operation.
///
/// The only recognized setting is the algorithm selector, a string naming
/// the hash function (default `"sha1"`). The selector is resolved when the
/// operation runs, so an unrecognized name surfaces as
/// [`DigestError::UnsupportedAlgorithm`](crate::DigestError) from the
/// operation itself rather than from options construction.
#[derive(Clone, Debug)]
pub struct DigestOptions {
    algorithm: String,
}

impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default().as_str().to_owned(),
        }
    }
}

impl DigestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the hash function by name.
    pub fn algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithm = name.into();
        self
    }

    /// Resolve the selector string against the supported algorithms.
    pub fn resolve(&self) -> Result<Algorithm, UnsupportedAlgorithm> {
        self.algorithm.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolves_to_sha1() {
        assert_eq!(DigestOptions::default().resolve().unwrap(), Algorithm::Sha1);
    }

    #[test]
    fn selector_overrides_default() {
        let options = DigestOptions::new().algorithm("md5");
        assert_eq!(options.resolve().unwrap(), Algorithm::Md5);
    }

    #[test]
    fn unknown_selector_fails_at_resolution() {
        let options = DigestOptions::new().algorithm("whirlpool-512");
        assert!(options.resolve().is_err());
    }
}

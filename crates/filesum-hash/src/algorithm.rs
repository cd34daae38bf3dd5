use std::fmt;
use std::str::FromStr;

use crate::error::UnsupportedAlgorithm;

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// SHA-1 algorithm (the default selector)
    #[default]
    Sha1,
    /// MD5 algorithm
    Md5,
    /// SHA-256 algorithm
    Sha256,
    /// SHA-384 algorithm
    Sha384,
    /// SHA-512 algorithm
    Sha512,
}

impl Algorithm {
    /// Get the string representation of this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Md5 => "md5",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Get the digest length in bytes for this algorithm.
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Md5 => 16,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnsupportedAlgorithm;

    /// Parse a selector string. Names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(Algorithm::Sha1),
            "md5" => Ok(Algorithm::Md5),
            "sha256" => Ok(Algorithm::Sha256),
            "sha384" => Ok(Algorithm::Sha384),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(UnsupportedAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sha1() {
        assert_eq!(Algorithm::default(), Algorithm::Sha1);
    }

    #[test]
    fn parses_known_selectors() {
        assert_eq!("sha1".parse::<Algorithm>().unwrap(), Algorithm::Sha1);
        assert_eq!("md5".parse::<Algorithm>().unwrap(), Algorithm::Md5);
        assert_eq!("sha256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
        assert_eq!("sha384".parse::<Algorithm>().unwrap(), Algorithm::Sha384);
        assert_eq!("sha512".parse::<Algorithm>().unwrap(), Algorithm::Sha512);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("SHA1".parse::<Algorithm>().unwrap(), Algorithm::Sha1);
        assert_eq!("Md5".parse::<Algorithm>().unwrap(), Algorithm::Md5);
    }

    #[test]
    fn rejects_unknown_selector() {
        let err = "sha0".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnsupportedAlgorithm("sha0".to_string()));
        assert_eq!(err.to_string(), "unsupported hash algorithm: sha0");
    }

    #[test]
    fn digest_lengths() {
        assert_eq!(Algorithm::Sha1.digest_len(), 20);
        assert_eq!(Algorithm::Md5.digest_len(), 16);
        assert_eq!(Algorithm::Sha256.digest_len(), 32);
        assert_eq!(Algorithm::Sha384.digest_len(), 48);
        assert_eq!(Algorithm::Sha512.digest_len(), 64);
    }

    #[test]
    fn round_trips_through_as_str() {
        for algorithm in [
            Algorithm::Sha1,
            Algorithm::Md5,
            Algorithm::Sha256,
            Algorithm::Sha384,
            Algorithm::Sha512,
        ] {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
    }
}

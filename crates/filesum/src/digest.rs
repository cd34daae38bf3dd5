//! Whole-file digest computation and verification.
//!
//! Files are streamed through the selected hash in fixed-size chunks, never
//! loaded whole into memory. Filesystem errors propagate with their original
//! classification; a missing path is observable as
//! [`io::ErrorKind::NotFound`](std::io::ErrorKind) through
//! [`DigestError::Io`].

use std::io::Read;
use std::path::Path;

use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::error::{DigestError, Result};
use crate::options::DigestOptions;

const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the digest of the file at `path` and return it as a lowercase
/// hex string.
pub async fn get(path: impl AsRef<Path>, options: &DigestOptions) -> Result<String> {
    let path = path.as_ref();
    let algorithm = options.resolve()?;
    let mut hasher = algorithm.hasher();

    let mut file = tokio::fs::File::open(path).await?;
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let digest = hex::encode(hasher.finalize());
    debug!(%algorithm, path = %path.display(), %digest, "computed file digest");
    Ok(digest)
}

/// Blocking form of [`get`].
pub fn get_sync(path: impl AsRef<Path>, options: &DigestOptions) -> Result<String> {
    let path = path.as_ref();
    let algorithm = options.resolve()?;
    let mut hasher = algorithm.hasher();

    let mut file = std::fs::File::open(path)?;
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let digest = hex::encode(hasher.finalize());
    debug!(%algorithm, path = %path.display(), %digest, "computed file digest");
    Ok(digest)
}

/// Compute the digest of the file at `path` and compare it against
/// `expected`.
///
/// The comparison is an exact, case-sensitive string match. A missing file
/// surfaces as [`DigestError::Io`], never as [`DigestError::Mismatch`].
pub async fn check(
    path: impl AsRef<Path>,
    expected: &str,
    options: &DigestOptions,
) -> Result<()> {
    let actual = get(path, options).await?;
    compare(expected, &actual)
}

/// Blocking form of [`check`].
pub fn check_sync(path: impl AsRef<Path>, expected: &str, options: &DigestOptions) -> Result<()> {
    let actual = get_sync(path, options)?;
    compare(expected, &actual)
}

fn compare(expected: &str, actual: &str) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(DigestError::Mismatch {
            expected: expected.to_owned(),
            actual: actual.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_is_exact_and_case_sensitive() {
        assert!(compare("abc123", "abc123").is_ok());
        assert!(matches!(
            compare("ABC123", "abc123"),
            Err(DigestError::Mismatch { .. })
        ));
        assert!(matches!(
            compare("abc123", "abc1234"),
            Err(DigestError::Mismatch { .. })
        ));
    }

    #[test]
    fn mismatch_carries_both_digests() {
        match compare("expected-digest", "actual-digest") {
            Err(DigestError::Mismatch { expected, actual }) => {
                assert_eq!(expected, "expected-digest");
                assert_eq!(actual, "actual-digest");
            }
            other => panic!("expected Mismatch, got {other:?}"),
        }
    }
}

//! Checksum verification of downloaded files.
//!
//! The catalog publishes MD5 checksums; CRC32 values (plain decimal numbers)
//! are accepted as well.
//!
//! ```rust
//! use modfetch::download::hash::{detect_hash_type, HashType};
//!
//! assert_eq!(detect_hash_type("d41d8cd98f00b204e9800998ecf8427e"), Some(HashType::Md5));
//! assert_eq!(detect_hash_type("1127497"), Some(HashType::Crc32));
//! assert_eq!(detect_hash_type("invalid"), None);
//! ```

use crate::error::{Error, Result};

use bacy::{calculate_crc32, calculate_md5};
use std::path::{Path, PathBuf};

/// Supported checksum types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    Md5,
    Crc32,
}

/// Detect the checksum type from its format.
///
/// MD5 checksums are 32 hex characters, CRC32 ones parse as a `u32`.
pub fn detect_hash_type(hash: &str) -> Option<HashType> {
    if hash.len() == 32 && hash.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(HashType::Md5)
    } else if hash.parse::<u32>().is_ok() {
        Some(HashType::Crc32)
    } else {
        None
    }
}

/// Verify the checksum of a local file.
///
/// * `Ok(true)` if the checksums match or none is expected
/// * `Ok(false)` if the file is missing, the checksums differ or the
///   expected value has an unknown format
/// * `Err` if the checksum could not be computed
pub fn verify_hash(file_path: &Path, expected_hash: Option<&str>) -> Result<bool> {
    let Some(expected_hash) = expected_hash else {
        return Ok(true);
    };

    if !file_path.exists() {
        return Ok(false);
    }

    match detect_hash_type(expected_hash) {
        Some(HashType::Md5) => {
            let calculated = calculate_md5(PathBuf::from(file_path))
                .map_err(|e| Error::Internal(format!("md5 of {:?}: {}", file_path, e)))?;
            Ok(calculated.eq_ignore_ascii_case(expected_hash))
        }
        Some(HashType::Crc32) => {
            let calculated = calculate_crc32(PathBuf::from(file_path))
                .map_err(|e| Error::Internal(format!("crc32 of {:?}: {}", file_path, e)))?;
            Ok(expected_hash.parse::<u32>().is_ok_and(|expected| expected == calculated))
        }
        None => Ok(false),
    }
}

//! A single file to download.

use crate::error::Error;

use reqwest::Url;
use std::convert::TryFrom;
use std::path::Path;

/// Represents a file to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// URL of the file to download.
    pub url: Url,
    /// File name used to save the file on disk.
    pub filename: String,
    /// Expected checksum of the file (MD5 or CRC32).
    pub hash: Option<String>,
}

impl Download {
    /// Creates a new [`Download`].
    ///
    /// When using [`Download::try_from`] the file name is taken from the
    /// last URL segment instead.
    pub fn new(url: &Url, filename: &str) -> Self {
        Self::new_with_hash(url, filename, None)
    }

    /// Creates a new [`Download`] with an expected checksum.
    pub fn new_with_hash(url: &Url, filename: &str, hash: Option<String>) -> Self {
        Self {
            url: url.clone(),
            filename: String::from(filename),
            hash,
        }
    }

    /// Compare the checksum of a local file with the expected one.
    ///
    /// Returns `Ok(true)` when no checksum is expected.
    pub fn verify_hash(&self, file_path: &Path) -> crate::Result<bool> {
        super::hash::verify_hash(file_path, self.hash.as_deref())
    }
}

impl TryFrom<&Url> for Download {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        let filename = value
            .path_segments()
            .ok_or_else(|| {
                Error::InvalidUrl(format!(
                    "The url \"{}\" does not contain a valid path",
                    value
                ))
            })?
            .next_back()
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| {
                Error::InvalidUrl(format!("The url \"{}\" does not contain a filename", value))
            })?;

        // Segments are percent-encoded; store the decoded name on disk.
        // A literal '+' is common in mod file names and must survive decoding.
        let escaped = filename.replace('+', "%2B");
        let filename: String = form_urlencoded::parse(escaped.as_bytes())
            .map(|(key, val)| [key, val].concat())
            .collect();

        Ok(Download::new(value, &filename))
    }
}

impl TryFrom<&str> for Download {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| Download::try_from(&u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_str() {
        let d = Download::try_from("https://edge.forgecdn.net/files/4712/361/fabric-api.jar")
            .unwrap();
        assert_eq!(d.filename, "fabric-api.jar");
        assert!(d.hash.is_none());
    }

    #[test]
    fn test_try_from_decodes_filename() {
        let d = Download::try_from("https://example.com/files/Just%20Enough%20Items.jar").unwrap();
        assert_eq!(d.filename, "Just Enough Items.jar");
    }

    #[test]
    fn test_try_from_keeps_plus() {
        let d = Download::try_from("https://example.com/fabric-api-0.92.2+1.20.1.jar").unwrap();
        assert_eq!(d.filename, "fabric-api-0.92.2+1.20.1.jar");
    }

    #[test]
    fn test_try_from_without_filename() {
        assert!(matches!(
            Download::try_from("https://example.com/files/"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            Download::try_from("not-a-valid-url"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_new_with_hash() {
        let url = Url::parse("https://example.com/a").unwrap();
        let d = Download::new_with_hash(&url, "a.jar", Some("abc".into()));
        assert_eq!(d.filename, "a.jar");
        assert_eq!(d.hash.as_deref(), Some("abc"));
    }
}

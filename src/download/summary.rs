//! Download outcome reporting.

use super::download::Download;

/// Download status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Download failed with error message
    Fail(String),
    /// Download not yet started
    NotStarted,
    /// Download was skipped with reason
    Skipped(String),
    /// Download completed successfully
    Success,
    /// Download completed but the checksum does not match
    HashMismatch(String),
}

/// Represents a [`Download`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    download: Download,
    /// Bytes on disk once finished.
    size: u64,
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`] in the [`Status::NotStarted`] state.
    pub fn new(download: Download, size: u64) -> Self {
        Self {
            download,
            size,
            status: Status::NotStarted,
        }
    }

    /// Attach a status to a [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Replace the recorded size.
    pub fn with_size(self, size: u64) -> Self {
        Self { size, ..self }
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn download(&self) -> &Download {
        &self.download
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether the file is on disk with the expected content.
    ///
    /// Skipped downloads count: they are skipped because the file is
    /// already present and verified.
    pub fn is_complete(&self) -> bool {
        matches!(self.status, Status::Success | Status::Skipped(_))
    }

    /// Mark the summary as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        self.with_status(Status::Fail(msg.to_string()))
    }

    /// Mark the summary as skipped with a message.
    pub fn skip(self, msg: impl std::fmt::Display) -> Self {
        self.with_status(Status::Skipped(msg.to_string()))
    }

    /// Mark the summary as having a checksum mismatch with a message.
    pub fn hash_mismatch(self, msg: impl std::fmt::Display) -> Self {
        self.with_status(Status::HashMismatch(msg.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Url;

    fn create_test_download() -> Download {
        let url = Url::parse("https://example.com/jei.jar").unwrap();
        Download::new(&url, "jei.jar")
    }

    #[test]
    fn test_summary_creation() {
        let summary = Summary::new(create_test_download(), 1024);

        assert_eq!(summary.size(), 1024);
        assert_eq!(summary.download().filename, "jei.jar");
        assert_eq!(summary.status(), &Status::NotStarted);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_summary_fail() {
        let summary = Summary::new(create_test_download(), 0).fail("Network error");
        assert_eq!(summary.status(), &Status::Fail("Network error".into()));
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_summary_skip_counts_as_complete() {
        let summary = Summary::new(create_test_download(), 10).skip("File exists");
        assert_eq!(summary.status(), &Status::Skipped("File exists".into()));
        assert!(summary.is_complete());
    }

    #[test]
    fn test_summary_hash_mismatch() {
        let summary = Summary::new(create_test_download(), 1024)
            .hash_mismatch("expected abc123")
            .with_size(2048);

        assert_eq!(summary.status(), &Status::HashMismatch("expected abc123".into()));
        assert_eq!(summary.size(), 2048);
        assert!(!summary.is_complete());
    }
}

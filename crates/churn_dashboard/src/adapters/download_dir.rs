// Rust guideline compliant 2026-10-17

//! Download-directory adapter for the `DownloadSink` port.
//!
//! Stores each offered download as a file in one directory. Bytes are written
//! to a temporary `.part` file and renamed into place, so a reader never sees
//! a half-written report.

use std::path::PathBuf;

use domain::{DeliveryError, DownloadSink};

/// `DownloadSink` adapter writing files into a directory.
#[derive(Debug, Clone)]
pub struct DownloadDirectory {
    dir: PathBuf,
}

impl DownloadDirectory {
    /// Deliver downloads into `dir`; it is created on first use.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DownloadDirectory {
    fn offer_download(
        &self,
        bytes: &[u8],
        file_name: &str,
        mime_type: &str,
    ) -> Result<String, DeliveryError> {
        if file_name.is_empty()
            || file_name.starts_with('.')
            || file_name.contains(['/', '\\'])
        {
            return Err(DeliveryError::Failed {
                reason: format!("refusing unsafe file name {file_name:?}"),
            });
        }
        let failed = |e: std::io::Error| DeliveryError::Failed {
            reason: format!("{}: {e}", self.dir.display()),
        };

        std::fs::create_dir_all(&self.dir).map_err(failed)?;
        let target = self.dir.join(file_name);
        let partial = self.dir.join(format!(".{file_name}.part"));
        std::fs::write(&partial, bytes).map_err(failed)?;
        std::fs::rename(&partial, &target).map_err(failed)?;

        tracing::info!(
            path = %target.display(),
            mime_type,
            bytes = bytes.len(),
            "download_dir.offer_download"
        );
        Ok(target.display().to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::DownloadDirectory;
    use domain::{DeliveryError, DownloadSink as _, REPORT_MIME_TYPE};

    #[test]
    fn writes_bytes_under_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = DownloadDirectory::new(tmp.path().join("reports"));

        let location = sink
            .offer_download(b"%PDF-1.3 test", "customer_1_churn_report.pdf", REPORT_MIME_TYPE)
            .unwrap();

        let path = tmp.path().join("reports").join("customer_1_churn_report.pdf");
        assert_eq!(location, path.display().to_string());
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.3 test");
    }

    #[test]
    fn leaves_no_partial_file_behind() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = DownloadDirectory::new(tmp.path());
        sink.offer_download(b"data", "report.pdf", REPORT_MIME_TYPE).unwrap();

        let names: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["report.pdf".to_owned()]);
    }

    #[test]
    fn rejects_path_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = DownloadDirectory::new(tmp.path());
        for name in ["../escape.pdf", "a/b.pdf", "", ".hidden"] {
            assert!(
                matches!(
                    sink.offer_download(b"x", name, REPORT_MIME_TYPE),
                    Err(DeliveryError::Failed { .. })
                ),
                "{name:?} must be rejected"
            );
        }
    }
}

//! Input resolution: decide which PDF file to process.
//!
//! An explicit path is taken verbatim. Whether it exists is the extractor's
//! concern, so a typo surfaces as "file not found" rather than as a
//! discovery failure.
//!
//! Without a path, the directory's immediate entries are scanned in the order
//! `read_dir` yields them and the first name ending in `.pdf` wins. That
//! order is whatever the file system returns; it is not alphabetical and may
//! differ between platforms.

use crate::error::PdfCostError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The resolved input, either the path the user gave or one we found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedInput {
    /// Path was supplied on the command line.
    Explicit(PathBuf),
    /// No path was supplied; this file was discovered in the scanned directory.
    Discovered(PathBuf),
}

impl ResolvedInput {
    /// Get the path to the PDF file regardless of how it was resolved.
    pub fn path(&self) -> &Path {
        match self {
            ResolvedInput::Explicit(p) => p,
            ResolvedInput::Discovered(p) => p,
        }
    }

    pub fn is_discovered(&self) -> bool {
        matches!(self, ResolvedInput::Discovered(_))
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            ResolvedInput::Explicit(p) | ResolvedInput::Discovered(p) => p,
        }
    }
}

/// Resolve the PDF to process.
///
/// Uses `explicit` when it is a non-empty string, otherwise scans `dir`.
pub fn resolve_input(explicit: Option<&str>, dir: &Path) -> Result<ResolvedInput, PdfCostError> {
    if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        debug!("Using explicit PDF path: {}", path);
        return Ok(ResolvedInput::Explicit(PathBuf::from(path)));
    }

    match find_first_pdf(dir) {
        Some(path) => {
            info!("Discovered PDF: {}", path.display());
            Ok(ResolvedInput::Discovered(path))
        }
        None => Err(PdfCostError::NoPdfFound {
            dir: dir.to_path_buf(),
        }),
    }
}

/// Return the first entry of `dir` whose name ends with `.pdf`.
///
/// Non-recursive. The returned path is `dir` joined with the entry name, so
/// scanning `.` yields `./name.pdf`. An unreadable directory counts as
/// holding no PDFs.
pub fn find_first_pdf(dir: &Path) -> Option<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list {}: {}", dir.display(), e);
            return None;
        }
    };

    entries
        .filter_map(Result::ok)
        .find(|entry| has_pdf_suffix(&entry.file_name().to_string_lossy()))
        .map(|entry| dir.join(entry.file_name()))
}

/// Case-sensitive `.pdf` suffix check.
fn has_pdf_suffix(name: &str) -> bool {
    name.ends_with(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_has_pdf_suffix() {
        assert!(has_pdf_suffix("report.pdf"));
        assert!(has_pdf_suffix(".pdf"));
        assert!(!has_pdf_suffix("report.PDF"));
        assert!(!has_pdf_suffix("report.pdf.bak"));
        assert!(!has_pdf_suffix("pdf"));
        assert!(!has_pdf_suffix(""));
    }

    #[test]
    fn explicit_path_is_used_verbatim() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_input(Some("does/not/exist.pdf"), dir.path()).unwrap();
        assert_eq!(
            resolved,
            ResolvedInput::Explicit(PathBuf::from("does/not/exist.pdf"))
        );
        assert!(!resolved.is_discovered());
    }

    #[test]
    fn single_pdf_is_discovered() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        std::fs::write(dir.path().join("paper.pdf"), b"%PDF-1.5").unwrap();

        let resolved = resolve_input(None, dir.path()).unwrap();
        assert!(resolved.is_discovered());
        assert_eq!(resolved.path(), dir.path().join("paper.pdf"));
    }

    #[test]
    fn empty_explicit_path_falls_back_to_discovery() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("only.pdf"), b"%PDF-1.5").unwrap();

        let resolved = resolve_input(Some(""), dir.path()).unwrap();
        assert_eq!(resolved.into_path(), dir.path().join("only.pdf"));
    }

    #[test]
    fn no_pdf_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("scan.PDF"), b"%PDF-1.5").unwrap();
        std::fs::write(dir.path().join("readme.md"), b"# hi").unwrap();

        let err = resolve_input(None, dir.path()).unwrap_err();
        assert!(matches!(err, PdfCostError::NoPdfFound { .. }));
    }

    #[test]
    fn discovery_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("deep.pdf"), b"%PDF-1.5").unwrap();

        assert_eq!(find_first_pdf(dir.path()), None);
    }

    #[test]
    fn missing_directory_finds_nothing() {
        let dir = TempDir::new().unwrap();
        assert_eq!(find_first_pdf(&dir.path().join("gone")), None);
    }
}

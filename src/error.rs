//! Error types for the pdf-token-cost library.
//!
//! Every stage of the pipeline reports failure through [`PdfCostError`].
//! The variants fall into three groups that callers treat differently:
//!
//! * **Discovery**: no path was given and no PDF could be found
//!   ([`PdfCostError::NoPdfFound`]). The CLI exits with status 1.
//!
//! * **Extraction**: the PDF could not be opened or produced no text
//!   (see [`PdfCostError::is_extraction_failure`]). Non-fatal: the report is
//!   skipped and the process still exits 0 unless `--strict` is set.
//!
//! * **Tokenizer**: unrecoverable; propagated to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf-token-cost library.
#[derive(Debug, Error)]
pub enum PdfCostError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// No explicit path was supplied and the scanned directory holds no PDF.
    #[error("No PDF path provided and no PDF files found in '{dir}'")]
    NoPdfFound { dir: PathBuf },

    /// Input file was not found at the given path.
    #[error("PDF file not found at {path}")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'")]
    PermissionDenied { path: PathBuf },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// The PDF could not be parsed or a page's text could not be decoded.
    #[error("PDF '{path}' could not be read: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// The document parsed, but none of its pages yielded any text.
    #[error("PDF '{path}' contains no extractable text")]
    NoExtractableText { path: PathBuf },

    /// Reading the file failed part-way through.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Tokenizer errors ──────────────────────────────────────────────────
    /// The encoder could not be built or refused the input text.
    #[error("Tokenizer '{encoding}' failed: {detail}")]
    Tokenizer { encoding: String, detail: String },
}

impl PdfCostError {
    /// True for the failures that abort the pipeline after input resolution
    /// but before tokenisation.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            PdfCostError::FileNotFound { .. }
                | PdfCostError::PermissionDenied { .. }
                | PdfCostError::CorruptPdf { .. }
                | PdfCostError::NoExtractableText { .. }
                | PdfCostError::Io { .. }
        )
    }
}

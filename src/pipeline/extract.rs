//! Text extraction: concatenate every page's text in document order.
//!
//! The file is opened here, not by lopdf, so a missing file and a permission
//! problem can be told apart from a parse failure. The handle is owned by
//! [`extract_text`] and closed when it returns, whichever way it returns.
//!
//! Page text is joined with no separator. Token counts therefore match what
//! the model would see if the pages were pasted back to back.

use crate::error::PdfCostError;
use crate::progress::{ExtractionProgressCallback, NoopProgressCallback};
use lopdf::Document;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use tracing::{debug, info};

/// Extract the full text of the PDF at `path`.
///
/// # Errors
/// - [`PdfCostError::FileNotFound`] / [`PdfCostError::PermissionDenied`] /
///   [`PdfCostError::Io`] when the file cannot be opened
/// - [`PdfCostError::CorruptPdf`] when lopdf cannot parse the document or
///   decode a page
/// - [`PdfCostError::NoExtractableText`] when the pages yield nothing but
///   whitespace (e.g. a scanned document with no text layer, or text drawn
///   in a font lopdf cannot decode)
pub fn extract_text(
    path: &Path,
    progress: Option<&dyn ExtractionProgressCallback>,
) -> Result<String, PdfCostError> {
    let progress = progress.unwrap_or(&NoopProgressCallback);

    let file = open_pdf(path)?;
    let document = Document::load_from(BufReader::new(file)).map_err(|e| {
        PdfCostError::CorruptPdf {
            path: path.to_path_buf(),
            detail: e.to_string(),
        }
    })?;

    let pages = document.get_pages();
    let total_pages = pages.len();
    info!("PDF loaded: {} pages", total_pages);
    progress.on_extraction_start(total_pages);

    let mut text = String::new();
    for (idx, &page_number) in pages.keys().enumerate() {
        let page_text =
            document
                .extract_text(&[page_number])
                .map_err(|e| PdfCostError::CorruptPdf {
                    path: path.to_path_buf(),
                    detail: format!("page {page_number}: {e}"),
                })?;

        let chars = page_text.chars().count();
        debug!("Extracted page {} → {} chars", page_number, chars);
        progress.on_page_extracted(idx + 1, total_pages, chars);

        text.push_str(&page_text);
    }

    let total_chars = text.chars().count();
    progress.on_extraction_complete(total_pages, total_chars);

    // lopdf ends every text block with a newline, even when none of its
    // glyphs could be decoded.
    if text.trim().is_empty() {
        return Err(PdfCostError::NoExtractableText {
            path: path.to_path_buf(),
        });
    }

    info!("Extracted {} chars from {} pages", total_chars, total_pages);
    Ok(text)
}

/// Open `path` for binary reading, mapping the failure kinds we report
/// separately.
fn open_pdf(path: &Path) -> Result<File, PdfCostError> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PdfCostError::FileNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => PdfCostError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => PdfCostError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

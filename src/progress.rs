//! Progress-callback trait for per-page extraction events.
//!
//! Inject an [`Arc<dyn ExtractionProgressCallback>`] via
//! [`crate::config::EstimateConfigBuilder::progress_callback`] to receive
//! events while the extractor walks the document.
//!
//! Large scanned books can take several seconds to parse, so the CLI uses
//! these events to drive a spinner. Library callers can forward them anywhere
//! (a log, a channel, a UI) without the pipeline knowing how.
//!
//! # Example
//!
//! ```rust
//! use pdf_token_cost::{EstimateConfig, ExtractionProgressCallback};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct PageCounter {
//!     pages: AtomicUsize,
//! }
//!
//! impl ExtractionProgressCallback for PageCounter {
//!     fn on_page_extracted(&self, _page_num: usize, _total_pages: usize, _chars: usize) {
//!         self.pages.fetch_add(1, Ordering::SeqCst);
//!     }
//! }
//!
//! let counter = Arc::new(PageCounter { pages: AtomicUsize::new(0) });
//!
//! let config = EstimateConfig::builder()
//!     .input_price(1.50)
//!     .progress_callback(counter as Arc<dyn ExtractionProgressCallback>)
//!     .build();
//! ```

use std::sync::Arc;

/// Called by the extractor as it processes each page.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait ExtractionProgressCallback: Send + Sync {
    /// Called once after the document is parsed, before any page text is read.
    fn on_extraction_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called after each page's text has been appended.
    ///
    /// # Arguments
    /// * `page_num`   : 1-indexed page number
    /// * `total_pages`: total pages in the document
    /// * `chars`      : characters extracted from this page
    fn on_page_extracted(&self, page_num: usize, total_pages: usize, chars: usize) {
        let _ = (page_num, total_pages, chars);
    }

    /// Called once after every page has been read.
    fn on_extraction_complete(&self, total_pages: usize, total_chars: usize) {
        let _ = (total_pages, total_chars);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl ExtractionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::EstimateConfig`].
pub type ProgressCallback = Arc<dyn ExtractionProgressCallback>;

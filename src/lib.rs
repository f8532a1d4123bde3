//! # pdf-token-cost
//!
//! Estimate what it costs to send a PDF's text through a token-priced
//! language-model API.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input     explicit path, or first *.pdf in the working directory
//!  ├─ 2. Extract   page text via lopdf, concatenated in document order
//!  ├─ 3. Tokenize  count tokens with tiktoken (p50k_base by default)
//!  ├─ 4. Price     tokens ÷ 1M × $/1M for input and estimated output
//!  └─ 5. Report    eight labelled lines, or JSON
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_token_cost::{estimate, EstimateConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EstimateConfig::builder()
//!         .input_price(1.50)
//!         .output_price(2.00)
//!         .output_tokens(5_000)
//!         .build();
//!     let report = estimate("document.pdf", &config)?;
//!     print!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf-token-cost` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf-token-cost = { version = "1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod cost;
pub mod error;
pub mod estimate;
pub mod pipeline;
pub mod progress;
pub mod report;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{Encoding, EstimateConfig, EstimateConfigBuilder};
pub use cost::{CostReport, Pricing};
pub use error::PdfCostError;
pub use estimate::{estimate, estimate_text};
pub use pipeline::input::{find_first_pdf, resolve_input, ResolvedInput};
pub use progress::{ExtractionProgressCallback, NoopProgressCallback, ProgressCallback};
pub use report::{render, write_report, ReportFormat};

//! Full-pipeline entry points.
//!
//! [`estimate`] runs extract → tokenize → price for one PDF. The steps are
//! strictly sequential; the first failure aborts the run and nothing is
//! priced, so callers either get a complete [`CostReport`] or an error.

use crate::config::EstimateConfig;
use crate::cost::CostReport;
use crate::error::PdfCostError;
use crate::pipeline::{extract, tokenize};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Estimate the cost of sending the text of the PDF at `pdf_path`.
///
/// # Errors
/// Extraction failures ([`PdfCostError::is_extraction_failure`]) and
/// tokenizer failures are returned as-is.
///
/// # Example
/// ```rust,no_run
/// use pdf_token_cost::{estimate, EstimateConfig};
///
/// let config = EstimateConfig::builder()
///     .input_price(0.10)
///     .output_price(0.40)
///     .output_tokens(2_000)
///     .build();
/// let report = estimate("paper.pdf", &config)?;
/// print!("{report}");
/// # Ok::<(), pdf_token_cost::PdfCostError>(())
/// ```
pub fn estimate(
    pdf_path: impl AsRef<Path>,
    config: &EstimateConfig,
) -> Result<CostReport, PdfCostError> {
    let start = Instant::now();
    let pdf_path = pdf_path.as_ref();
    info!("Starting estimate: {}", pdf_path.display());

    // ── Step 1: Extract text ─────────────────────────────────────────────
    let text = extract::extract_text(pdf_path, config.progress_callback.as_deref())?;

    // ── Step 2: Count tokens and price them ──────────────────────────────
    let report = estimate_text(&text, config)?;

    info!(
        "Estimate complete: {} input tokens, ${:.4} total, {}ms",
        report.input_tokens,
        report.total_cost,
        start.elapsed().as_millis()
    );
    Ok(report)
}

/// Estimate the cost of already-extracted text.
pub fn estimate_text(text: &str, config: &EstimateConfig) -> Result<CostReport, PdfCostError> {
    let input_tokens = tokenize::count_tokens(text, config.encoding)?;
    Ok(CostReport::compute(
        input_tokens as u64,
        config.output_tokens,
        &config.pricing,
    ))
}

//! CLI binary for pdf-token-cost.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `EstimateConfig`, reports extraction problems on stderr and prints the
//! cost breakdown on stdout.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use pdf_token_cost::{
    estimate, resolve_input, write_report, EstimateConfig, ExtractionProgressCallback,
    PdfCostError, ProgressCallback, ReportFormat,
};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// No PDF path given and none found in the working directory.
const EXIT_NO_PDF: u8 = 1;
/// Extraction failed and `--strict` was set.
const EXIT_EXTRACTION_FAILED: u8 = 3;

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Spinner shown on stderr while pages are extracted. indicatif hides it
/// automatically when stderr is not a terminal.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(style);
        bar.set_prefix("Extracting");
        bar.set_message("Opening PDF…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar })
    }

    fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl ExtractionProgressCallback for CliProgressCallback {
    fn on_extraction_start(&self, total_pages: usize) {
        self.bar.set_message(format!("{total_pages} pages"));
    }

    fn on_page_extracted(&self, page_num: usize, total_pages: usize, _chars: usize) {
        self.bar.set_message(format!("page {page_num}/{total_pages}"));
    }

    fn on_extraction_complete(&self, _total_pages: usize, _total_chars: usize) {
        self.clear();
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Price a specific file at $1.50 in / $2.00 out per million tokens
  pdf-token-cost report.pdf -i 1.50 -o 2.00 -n 5000

  # Use the first *.pdf in the current directory, input cost only
  pdf-token-cost -i 0.10

  # Machine-readable output
  pdf-token-cost report.pdf -i 3.00 -o 15.00 -n 2000 --json

TOKENIZER:
  Input tokens are counted with the p50k_base encoding.

EXIT STATUS:
  0  report printed (or the PDF could not be read and --strict is off)
  1  no PDF path given and no PDF found in the current directory
  2  invalid arguments
  3  the PDF could not be read and --strict is on

ENVIRONMENT VARIABLES:
  PDF_TOKEN_COST_INPUT_PRICE    Default for --input-price
  PDF_TOKEN_COST_OUTPUT_PRICE   Default for --output-price
  PDF_TOKEN_COST_OUTPUT_TOKENS  Default for --num-output-tokens
  RUST_LOG                      Log filter (overrides --verbose)
"#;

/// Calculate the cost of processing a PDF with separate input and output token prices.
#[derive(Parser, Debug)]
#[command(
    name = "pdf-token-cost",
    version,
    about = "Calculate the cost of processing a PDF with separate input and output token prices",
    disable_version_flag = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the PDF file (if not provided, the first PDF in the current directory will be used).
    #[arg(value_name = "PDF_PATH")]
    pdf_path: Option<String>,

    /// Price per million input tokens in dollars (e.g. 1.40).
    #[arg(
        short = 'i',
        long = "input-price",
        value_name = "PRICE_IN",
        env = "PDF_TOKEN_COST_INPUT_PRICE",
        value_parser = parse_price,
        allow_negative_numbers = true
    )]
    input_price: f64,

    /// Price per million output tokens in dollars (e.g. 2.00).
    #[arg(
        short = 'o',
        long = "output-price",
        value_name = "PRICE_OUT",
        env = "PDF_TOKEN_COST_OUTPUT_PRICE",
        default_value_t = 0.0,
        value_parser = parse_price,
        allow_negative_numbers = true
    )]
    output_price: f64,

    /// Estimated number of output tokens.
    #[arg(
        short = 'n',
        long = "num-output-tokens",
        value_name = "N",
        env = "PDF_TOKEN_COST_OUTPUT_TOKENS",
        default_value_t = 0
    )]
    num_output_tokens: u64,

    /// Exit with status 3 when the PDF cannot be read instead of 0.
    #[arg(long, env = "PDF_TOKEN_COST_STRICT")]
    strict: bool,

    /// Print the report as JSON.
    #[arg(long, env = "PDF_TOKEN_COST_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs on stderr.
    #[arg(long, env = "PDF_TOKEN_COST_VERBOSE")]
    verbose: bool,

    /// Disable the extraction spinner.
    #[arg(long, env = "PDF_TOKEN_COST_NO_PROGRESS")]
    no_progress: bool,

    /// Show program's version number and exit.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

/// Parse a dollars-per-million price. Negative values are allowed; NaN and
/// infinity are not, since they can't be priced.
fn parse_price(s: &str) -> Result<f64, String> {
    let price: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("'{s}' is not a number: {e}"))?;
    if !price.is_finite() {
        return Err(format!("price must be a finite number, got '{s}'"));
    }
    Ok(price)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Library INFO logs would interleave with the report, so only errors
    // surface unless --verbose or RUST_LOG asks for more.
    let filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let format = if cli.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };

    // ── Resolve input ────────────────────────────────────────────────────
    let resolved = match resolve_input(cli.pdf_path.as_deref(), Path::new(".")) {
        Ok(resolved) => resolved,
        Err(PdfCostError::NoPdfFound { .. }) => {
            eprintln!(
                "Error: No PDF path provided and no PDF files found in the current directory."
            );
            return Ok(ExitCode::from(EXIT_NO_PDF));
        }
        Err(e) => return Err(e).context("Failed to resolve input"),
    };

    if resolved.is_discovered() {
        let notice = format!("Using PDF file: {}", resolved.path().display());
        // Keep stdout parseable in JSON mode.
        if cli.json {
            eprintln!("{notice}");
        } else {
            println!("{notice}");
        }
    }

    // ── Build config ─────────────────────────────────────────────────────
    let show_progress = !cli.no_progress && !cli.json;
    let spinner = show_progress.then(CliProgressCallback::new);
    let config = build_config(
        &cli,
        spinner
            .clone()
            .map(|cb| cb as Arc<dyn ExtractionProgressCallback>),
    );

    // ── Run estimate ─────────────────────────────────────────────────────
    let result = estimate(resolved.path(), &config);
    if let Some(ref spinner) = spinner {
        spinner.clear();
    }

    let report = match result {
        Ok(report) => report,
        Err(e) if e.is_extraction_failure() => {
            report_extraction_failure(&e);
            return Ok(if cli.strict {
                ExitCode::from(EXIT_EXTRACTION_FAILED)
            } else {
                ExitCode::SUCCESS
            });
        }
        Err(e) => return Err(e).context("Failed to estimate cost"),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, &report, format).context("Failed to write to stdout")?;

    Ok(ExitCode::SUCCESS)
}

/// Map CLI args to `EstimateConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> EstimateConfig {
    let mut builder = EstimateConfig::builder()
        .input_price(cli.input_price)
        .output_price(cli.output_price)
        .output_tokens(cli.num_output_tokens);

    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build()
}

/// Print the stderr diagnostic for a failed extraction.
///
/// A document without a text layer is skipped silently, like any other
/// document whose text comes back empty.
fn report_extraction_failure(err: &PdfCostError) {
    match err {
        PdfCostError::FileNotFound { .. } => eprintln!("Error: {err}"),
        PdfCostError::NoExtractableText { path } => {
            warn!("No text extracted from {}; nothing to price", path.display());
        }
        _ => eprintln!("Error processing PDF: {err}"),
    }
}

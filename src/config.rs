//! Configuration types for a cost estimate.
//!
//! Everything that shapes an estimate lives in [`EstimateConfig`], built via
//! [`EstimateConfigBuilder`]. The CLI maps its flags onto the builder; library
//! callers set only the fields they care about and keep the defaults for the
//! rest.

use crate::cost::Pricing;
use crate::progress::ProgressCallback;
use std::fmt;

/// Configuration for one cost estimate.
///
/// # Example
/// ```rust
/// use pdf_token_cost::{Encoding, EstimateConfig};
///
/// let config = EstimateConfig::builder()
///     .input_price(1.50)
///     .output_price(2.00)
///     .output_tokens(5_000)
///     .build();
///
/// assert_eq!(config.encoding, Encoding::P50kBase);
/// ```
#[derive(Clone, Default)]
pub struct EstimateConfig {
    /// Dollars per million input and output tokens. Default: both 0.
    pub pricing: Pricing,

    /// Caller's estimate of how many tokens the model will produce. Default: 0.
    pub output_tokens: u64,

    /// Encoding used to count input tokens. Default: [`Encoding::P50kBase`].
    ///
    /// The CLI always uses the default; other encodings are available to
    /// library callers pricing models from a different tokenizer family.
    pub encoding: Encoding,

    /// Optional per-page extraction progress events.
    pub progress_callback: Option<ProgressCallback>,
}

impl fmt::Debug for EstimateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EstimateConfig")
            .field("pricing", &self.pricing)
            .field("output_tokens", &self.output_tokens)
            .field("encoding", &self.encoding)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ExtractionProgressCallback>"),
            )
            .finish()
    }
}

impl EstimateConfig {
    /// Create a new builder for `EstimateConfig`.
    pub fn builder() -> EstimateConfigBuilder {
        EstimateConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`EstimateConfig`].
#[derive(Debug)]
pub struct EstimateConfigBuilder {
    config: EstimateConfig,
}

impl EstimateConfigBuilder {
    pub fn input_price(mut self, dollars_per_million: f64) -> Self {
        self.config.pricing.input_per_million = dollars_per_million;
        self
    }

    pub fn output_price(mut self, dollars_per_million: f64) -> Self {
        self.config.pricing.output_per_million = dollars_per_million;
        self
    }

    pub fn pricing(mut self, pricing: Pricing) -> Self {
        self.config.pricing = pricing;
        self
    }

    pub fn output_tokens(mut self, n: u64) -> Self {
        self.config.output_tokens = n;
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration.
    ///
    /// Prices are taken as given. The CLI rejects non-finite values while
    /// parsing its arguments; library callers that pass NaN get `NaN` back in
    /// the report.
    pub fn build(self) -> EstimateConfig {
        self.config
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Named BPE encoding used to count tokens.
///
/// | Encoding | Model family |
/// |----------|--------------|
/// | `p50k_base`   | text-davinci-002/003, Codex (default) |
/// | `cl100k_base` | gpt-3.5-turbo, gpt-4, text-embedding-ada-002 |
/// | `o200k_base`  | gpt-4o, gpt-4.1, o-series |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    P50kBase,
    Cl100kBase,
    O200kBase,
}

impl Encoding {
    /// The identifier tiktoken uses for this encoding.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::P50kBase => "p50k_base",
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::O200kBase => "o200k_base",
        }
    }

    /// Special-token strings this encoding refuses to see in ordinary text.
    pub fn special_tokens(self) -> &'static [&'static str] {
        match self {
            Encoding::P50kBase => &["<|endoftext|>"],
            Encoding::Cl100kBase => &[
                "<|endoftext|>",
                "<|fim_prefix|>",
                "<|fim_middle|>",
                "<|fim_suffix|>",
                "<|endofprompt|>",
            ],
            Encoding::O200kBase => &["<|endoftext|>", "<|endofprompt|>"],
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Cost arithmetic over token counts and per-million-token prices.

use serde::Serialize;

/// Tokens per pricing unit. API prices are quoted in dollars per million tokens.
pub const TOKENS_PER_PRICE_UNIT: f64 = 1_000_000.0;

/// Dollars per million input and output tokens.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pricing {
    pub input_per_million: f64,
    pub output_per_million: f64,
}

impl Pricing {
    pub fn new(input_per_million: f64, output_per_million: f64) -> Self {
        Self {
            input_per_million,
            output_per_million,
        }
    }
}

/// Cost breakdown for one document.
///
/// Amounts are kept at full precision; rounding to cents happens only when
/// the report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostReport {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    pub input_price_per_million: f64,
    pub output_price_per_million: f64,
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
}

impl CostReport {
    /// Price `input_tokens` and `output_tokens` at `pricing`.
    pub fn compute(input_tokens: u64, output_tokens: u64, pricing: &Pricing) -> Self {
        let input_cost = token_cost(input_tokens, pricing.input_per_million);
        let output_cost = token_cost(output_tokens, pricing.output_per_million);

        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens.saturating_add(output_tokens),
            input_price_per_million: pricing.input_per_million,
            output_price_per_million: pricing.output_per_million,
            input_cost,
            output_cost,
            total_cost: input_cost + output_cost,
        }
    }
}

fn token_cost(tokens: u64, price_per_million: f64) -> f64 {
    (tokens as f64 / TOKENS_PER_PRICE_UNIT) * price_per_million
}

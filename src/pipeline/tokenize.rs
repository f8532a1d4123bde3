//! Token counting with a named tiktoken encoding.
//!
//! The encoder is built on every call. Loading a BPE table takes tens of
//! milliseconds, which is noise next to PDF parsing, and it keeps the
//! library free of global state.
//!
//! Text is encoded as ordinary text. If it contains one of the encoding's
//! special-token strings the call fails instead of silently counting the
//! marker as a control token, matching tiktoken's default of disallowing
//! special tokens.

use crate::config::Encoding;
use crate::error::PdfCostError;
use tiktoken_rs::CoreBPE;
use tracing::debug;

/// Count the tokens `text` encodes to under `encoding`.
pub fn count_tokens(text: &str, encoding: Encoding) -> Result<usize, PdfCostError> {
    if let Some(special) = encoding
        .special_tokens()
        .iter()
        .find(|token| text.contains(*token))
    {
        return Err(PdfCostError::Tokenizer {
            encoding: encoding.name().to_string(),
            detail: format!(
                "text contains the disallowed special token {special:?}; \
                 remove it from the document before counting"
            ),
        });
    }

    let bpe = load_encoding(encoding)?;
    let count = bpe.encode_ordinary(text).len();
    debug!("{} chars → {} tokens ({})", text.len(), count, encoding);
    Ok(count)
}

fn load_encoding(encoding: Encoding) -> Result<CoreBPE, PdfCostError> {
    let bpe = match encoding {
        Encoding::P50kBase => tiktoken_rs::p50k_base(),
        Encoding::Cl100kBase => tiktoken_rs::cl100k_base(),
        Encoding::O200kBase => tiktoken_rs::o200k_base(),
    };
    bpe.map_err(|e| PdfCostError::Tokenizer {
        encoding: encoding.name().to_string(),
        detail: e.to_string(),
    })
}

//! Pipeline stages for estimating a PDF's token cost.
//!
//! Each submodule implements exactly one step, so each can be tested on its
//! own and swapped without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ tokenize ──▶ cost ──▶ report
//! (path)    (lopdf)     (tiktoken)
//! ```
//!
//! 1. [`input`]   : take the explicit path or discover the first `.pdf`
//! 2. [`extract`] : open the file and concatenate page text in order
//! 3. [`tokenize`]: count tokens under a named BPE encoding
//!
//! Pricing and rendering are pure and live in [`crate::cost`] and
//! [`crate::report`].

pub mod extract;
pub mod input;
pub mod tokenize;

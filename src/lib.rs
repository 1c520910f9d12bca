//! The compiler of the taiko drum pattern notation.
//!
//! A pattern is a compact line of text describing drum hits, such as
//! `(kkkdddk)kdd(kkkd)d[kkd]d k`. This crate converts it into an ordered sequence of
//! [`NoteToken`]s, the note cells that chat emojis or rendered images are made of.
//!
//! In detail, our policies are:
//!
//! - Accept only `k`, `d`, spaces, `(...)` and `[...]`, case-insensitively.
//! - Reject malformed text with a positioned error before any expansion, never produce a
//!   partial token list.
//! - Do not nest groups.
//! - Do not read environment state, the same text and config always compile to the same tokens.
//!
//! # Example
//!
//! ```
//! use taiko_pattern::{compile, pattern::token::ONE_HALF};
//!
//! let tokens = compile("d[kd]").unwrap();
//! let labels: Vec<_> = tokens.iter().map(|token| token.label()).collect();
//! assert_eq!(labels, ["1d", "1k8d", "8d"]);
//! assert_eq!(tokens[2].offset(), ONE_HALF);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod diagnostics;
pub mod pattern;

pub use pattern::{
    PatternError, PatternErrorWithRange, compile, compile_with_config, measure, token::NoteToken,
};

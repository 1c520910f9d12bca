//! Tests for `taiko_pattern::pattern`.

mod compile;
mod config;
mod emoji;
mod properties;
#[cfg(feature = "serde")]
mod serialization;

use taiko_pattern::pattern::prelude::*;

/// Compiles the source and returns the tokens as `(label, offset)` pairs.
pub fn compile_pairs(src: &str) -> Vec<(String, Offset)> {
    compile(src)
        .unwrap_or_else(|err| panic!("{src:?} must compile: {err}"))
        .into_iter()
        .map(|token| (token.label().to_owned(), token.offset()))
        .collect()
}

/// Compiles the source and returns the error content.
pub fn compile_err(src: &str) -> PatternError {
    match compile(src) {
        Ok(tokens) => panic!("{src:?} must be rejected, but compiled into {tokens:?}"),
        Err(err) => err.into_content(),
    }
}

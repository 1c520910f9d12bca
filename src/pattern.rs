//! The compiler of the taiko drum pattern notation.
//!
//! The notation is a line of `k` (ka) and `d` (don) hits, spaces for rests, and two kinds of
//! groups subdividing the beat: `(...)` into thirds and `[...]` into halves. For example,
//! `(kkkdddk)kdd(kkkd)d[kkd]d k` is a valid pattern.
//!
//! This module consists of three phases:
//!
//! - [`lex`] reads the text into positioned [`lex::symbol::Symbol`]s, case-insensitively, rejecting any
//!   character outside of the notation.
//! - [`validity`] rejects malformed structures, such as `((`, unbalanced symbols or nested
//!   groups, before any expansion work begins.
//! - [`expand`] walks the validated symbols and emits [`NoteToken`]s.
//!
//! [`compile`] runs all of them. Errors carry the character span of the offending source, so
//! they can be reported with [`crate::diagnostics`].

pub mod config;
pub mod emoji;
pub mod expand;
pub mod lex;
pub mod mixin;
pub mod prelude;
pub mod token;
pub mod validity;

use thiserror::Error;

use self::{
    config::{CompileConfig, default_config},
    expand::Segments,
    lex::symbol::{GroupKind, SymbolWithRange},
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    token::NoteToken,
};

/// An error occurred when compiling a pattern.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternError {
    /// The character is not a part of the notation.
    #[error("character `{0}` is not valid, only `k`, `d`, spaces, `()` and `[]` are allowed")]
    InvalidCharacter(char),
    /// The grouping symbol is repeated right after itself.
    #[error("duplicated symbol `{0}`")]
    DuplicateSymbol(char),
    /// The count of opening symbols differs from the count of closing symbols.
    #[error("the count of opening symbols does not match the count of closing symbols")]
    UnbalancedCounts,
    /// The closing symbol has no opening symbol before it.
    #[error("closing symbol `{0}` has no matching opening symbol")]
    UnmatchedSymbol(char),
    /// The closing symbol does not match the kind of the open group.
    #[error("expected closing symbol `{expected}`, but found `{found}`")]
    MismatchedSymbol {
        /// The closing symbol of the open group.
        expected: char,
        /// The closing symbol actually found.
        found: char,
    },
    /// The group was opened while another group is open.
    #[error("symbol `{0}` opens a group inside another group")]
    NestedGroup(char),
    /// The group was never closed.
    #[error("the group is not closed")]
    UnbalancedStructure,
    /// The group has no notes inside.
    #[error("empty {0}")]
    EmptyGroup(GroupKind),
    /// The symbols could not be expanded, because they had not been validated.
    #[error("malformed pattern `{0}`")]
    MalformedPattern(String),
    /// The output exceeds the configured limit.
    #[error("the output is too large: {count} exceeds the limit {limit}")]
    OutputTooLarge {
        /// The size of the output.
        count: usize,
        /// The limit of the size.
        limit: usize,
    },
}

/// A pattern error with position information.
pub type PatternErrorWithRange = SourceRangeMixin<PatternError>;

/// Compiles the pattern text into note-cell tokens with [`default_config`].
///
/// # Example
///
/// ```
/// use num::rational::Ratio;
/// use taiko_pattern::pattern::compile;
///
/// let tokens = compile("(kd)").unwrap();
/// assert_eq!(tokens[0].label(), "1k6d");
/// assert_eq!(tokens[1].label(), "6d2");
/// assert_eq!(tokens[1].offset(), Ratio::new(1, 3));
/// ```
///
/// # Errors
///
/// Returns the first problem found in the text. No token is produced in that case.
pub fn compile(source: &str) -> Result<Vec<NoteToken>, PatternErrorWithRange> {
    compile_with_config(source, &default_config())
}

/// Compiles the pattern text into note-cell tokens.
///
/// # Errors
///
/// Returns the first problem found in the text, or [`PatternError::OutputTooLarge`] if the
/// tokens would exceed [`CompileConfig::max_tokens`]. No token is produced in either case.
pub fn compile_with_config(
    source: &str,
    config: &CompileConfig,
) -> Result<Vec<NoteToken>, PatternErrorWithRange> {
    tracing::debug!(len = source.len(), "compiling pattern");
    let symbols = checked_symbols(source, config)?;
    expand::expand(&symbols, config)
}

/// Validates the pattern text and returns the number of tokens it compiles to, without building
/// them.
///
/// [`CompileConfig::max_tokens`] is not applied here, so the caller can compare the count to
/// limits of its own.
///
/// # Errors
///
/// Returns the first problem found in the text.
pub fn measure(source: &str, config: &CompileConfig) -> Result<usize, PatternErrorWithRange> {
    let symbols = lex::lex(source)?;
    validate(&symbols, config)?;
    count_tokens(&symbols, config)
}

fn validate(
    symbols: &[SymbolWithRange],
    config: &CompileConfig,
) -> Result<(), PatternErrorWithRange> {
    validity::validate(symbols, config).inspect_err(|err| {
        tracing::debug!(error = %err, "rejected pattern");
    })
}

fn count_tokens(
    symbols: &[SymbolWithRange],
    config: &CompileConfig,
) -> Result<usize, PatternErrorWithRange> {
    Segments::new(symbols).try_fold(0, |count, segment| -> Result<_, PatternErrorWithRange> {
        Ok(count + segment?.content().token_count(config))
    })
}

fn checked_symbols(
    source: &str,
    config: &CompileConfig,
) -> Result<Vec<SymbolWithRange>, PatternErrorWithRange> {
    let symbols = lex::lex(source)?;
    validate(&symbols, config)?;
    if let Some(limit) = config.max_tokens {
        let count = count_tokens(&symbols, config)?;
        if count > limit {
            tracing::debug!(count, limit, "pattern output too large");
            let end = symbols.last().map_or(0, SourceRangeMixin::end);
            return Err(PatternError::OutputTooLarge { count, limit }.into_wrapper_range(0..end));
        }
    }
    Ok(symbols)
}

/// Returns whether the text compiles with [`default_config`].
#[must_use]
pub fn is_valid(source: &str) -> bool {
    lex::lex(source).is_ok_and(|symbols| validate(&symbols, &default_config()).is_ok())
}

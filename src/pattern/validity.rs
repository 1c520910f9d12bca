//! Validity checks for the lexed symbols.
//!
//! The checks run in a fixed order and the first failure stops the pattern, so no partial token
//! list is ever produced from a malformed text:
//!
//! 1. duplicated adjacent grouping symbols, such as `((` or `]]`,
//! 2. balance of `(`/`)` and `[`/`]` counts,
//! 3. structural balance of the groups, where a group opened inside another one is rejected,
//! 4. empty groups, unless [`EmptyGroupWorkaround::Rest`] is configured.
//!
//! The character set is checked earlier by [`super::lex::lex`].

use itertools::Itertools;

use super::{
    PatternError, PatternErrorWithRange,
    config::{CompileConfig, EmptyGroupWorkaround},
    lex::symbol::{GroupKind, Symbol, SymbolWithRange},
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
};

/// Checks the symbols lexed from a pattern.
///
/// # Errors
///
/// Returns the first violation found, with the span of the offending symbols.
pub fn validate(
    symbols: &[SymbolWithRange],
    config: &CompileConfig,
) -> Result<(), PatternErrorWithRange> {
    check_duplicates(symbols)?;
    check_counts(symbols)?;
    check_structure(symbols)?;
    if config.empty_group == EmptyGroupWorkaround::Reject {
        check_empty_groups(symbols)?;
    }
    Ok(())
}

fn whole_span(symbols: &[SymbolWithRange]) -> std::ops::Range<usize> {
    let start = symbols.first().map_or(0, SourceRangeMixin::start);
    let end = symbols.last().map_or(0, SourceRangeMixin::end);
    start..end
}

fn check_duplicates(symbols: &[SymbolWithRange]) -> Result<(), PatternErrorWithRange> {
    let duplicated = symbols
        .iter()
        .tuple_windows()
        .find(|(a, b)| a.content().is_grouping() && a.content() == b.content());
    match duplicated {
        Some((a, b)) => Err(PatternError::DuplicateSymbol(a.content().as_char())
            .into_wrapper_range(a.start()..b.end())),
        None => Ok(()),
    }
}

fn check_counts(symbols: &[SymbolWithRange]) -> Result<(), PatternErrorWithRange> {
    let counts = symbols
        .iter()
        .map(SourceRangeMixin::content)
        .filter(|symbol| symbol.is_grouping())
        .counts();
    let count_of = |symbol: Symbol| counts.get(&symbol).copied().unwrap_or(0);
    let balanced = [GroupKind::Triplet, GroupKind::Duplet]
        .into_iter()
        .all(|kind| count_of(Symbol::Open(kind)) == count_of(Symbol::Close(kind)));
    if balanced {
        Ok(())
    } else {
        Err(PatternError::UnbalancedCounts.into_wrapper_range(whole_span(symbols)))
    }
}

fn check_structure(symbols: &[SymbolWithRange]) -> Result<(), PatternErrorWithRange> {
    // Groups never nest, so the stack holds one open group at most.
    let mut open: Option<SourceRangeMixin<GroupKind>> = None;
    for symbol in symbols {
        match (*symbol.content(), open) {
            (Symbol::Open(kind), Some(_)) => {
                return Err(PatternError::NestedGroup(kind.open_char()).into_wrapper(symbol));
            }
            (Symbol::Open(kind), None) => open = Some(kind.into_wrapper(symbol)),
            (Symbol::Close(kind), None) => {
                return Err(PatternError::UnmatchedSymbol(kind.close_char()).into_wrapper(symbol));
            }
            (Symbol::Close(kind), Some(opened)) if *opened.content() != kind => {
                return Err(PatternError::MismatchedSymbol {
                    expected: opened.content().close_char(),
                    found: kind.close_char(),
                }
                .into_wrapper_range(opened.start()..symbol.end()));
            }
            (Symbol::Close(_), Some(_)) => open = None,
            (Symbol::Note(_), _) => {}
        }
    }
    match open {
        Some(opened) => Err(PatternError::UnbalancedStructure
            .into_wrapper_range(opened.start()..whole_span(symbols).end)),
        None => Ok(()),
    }
}

fn check_empty_groups(symbols: &[SymbolWithRange]) -> Result<(), PatternErrorWithRange> {
    let empty = symbols
        .iter()
        .tuple_windows()
        .find_map(|(a, b)| match (a.content(), b.content()) {
            (Symbol::Open(open), Symbol::Close(close)) if open == close => Some((*open, a, b)),
            _ => None,
        });
    match empty {
        Some((kind, a, b)) => {
            Err(PatternError::EmptyGroup(kind).into_wrapper_range(a.start()..b.end()))
        }
        None => Ok(()),
    }
}

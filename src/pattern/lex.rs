//! Lexical analyzer of the pattern notation.
//!
//! Raw [str] == [lex] ==> [`SymbolWithRange`]s == [`super::validity`] ==> validated symbols
//! == [`super::expand`] ==> [`super::token::NoteToken`]s

mod cursor;
pub mod symbol;

use crate::pattern::{PatternError, PatternErrorWithRange, mixin::SourceRangeMixinExt};

use self::{
    cursor::Cursor,
    symbol::{Symbol, SymbolWithRange},
};

/// Analyzes and converts the pattern text into symbols.
///
/// Every character is lowercased on its own before it is read, so `K` and `d` are accepted
/// alike. The first character outside `k`, `d`, ` `, `(`, `)`, `[` and `]` stops lexing.
///
/// # Errors
///
/// Returns [`PatternError::InvalidCharacter`] with the original character and its span.
pub fn lex(source: &str) -> Result<Vec<SymbolWithRange>, PatternErrorWithRange> {
    let mut cursor = Cursor::new(source);
    let mut symbols = Vec::with_capacity(source.len());
    while !cursor.is_end() {
        let start = cursor.index();
        let Some((raw, normalized)) = cursor.next_char() else {
            break;
        };
        let end = cursor.index();
        match normalized.and_then(Symbol::from_char) {
            Some(symbol) => symbols.push(symbol.into_wrapper_range(start..end)),
            None => {
                tracing::debug!(%raw, index = start, "invalid character in pattern");
                return Err(PatternError::InvalidCharacter(raw).into_wrapper_range(start..end));
            }
        }
    }
    Ok(symbols)
}

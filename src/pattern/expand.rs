//! Expansion of validated symbols into note-cell tokens.
//!
//! The symbols are walked once from left to right. A plain note becomes a single cell on the
//! beat, and a group is expanded as a whole by the rule table of its [`GroupKind`]:
//!
//! - [`triplet`] for `(...)`,
//! - [`duplet`] for `[...]`.

pub mod duplet;
pub mod triplet;

use itertools::Itertools;

use super::{
    PatternError, PatternErrorWithRange,
    config::{CompileConfig, EmptyGroupWorkaround},
    lex::symbol::{GroupKind, Note, Symbol, SymbolWithRange},
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    token::NoteToken,
};

/// A unit of the pattern: a plain note, or a whole group with its interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A note outside of any group.
    Cell(Note),
    /// A group, where `interior` excludes the opening and closing symbols.
    Group {
        /// The subdivision of the group.
        kind: GroupKind,
        /// The symbols between the opening and closing symbols. They are all notes.
        interior: &'a [SymbolWithRange],
    },
}

/// A segment with position information.
pub type SegmentWithRange<'a> = SourceRangeMixin<Segment<'a>>;

impl Segment<'_> {
    /// Returns the number of tokens this segment expands to.
    #[must_use]
    pub fn token_count(&self, config: &CompileConfig) -> usize {
        match *self {
            Self::Cell(_) => 1,
            Self::Group { interior, .. } if interior.is_empty() => {
                usize::from(config.empty_group == EmptyGroupWorkaround::Rest)
            }
            Self::Group {
                kind: GroupKind::Triplet,
                interior,
            } => triplet::token_count(interior.len()),
            Self::Group {
                kind: GroupKind::Duplet,
                interior,
            } => duplet::token_count(interior.len()),
        }
    }
}

/// Splits symbols into [`Segment`]s.
///
/// The structure is checked again while walking, so this never panics on unvalidated symbols.
/// Such symbols yield [`PatternError::MalformedPattern`] instead.
pub struct Segments<'a> {
    symbols: &'a [SymbolWithRange],
    index: usize,
}

impl<'a> Segments<'a> {
    /// Creates a walker over the symbols.
    #[must_use]
    pub const fn new(symbols: &'a [SymbolWithRange]) -> Self {
        Self { symbols, index: 0 }
    }

    fn malformed(&mut self, excerpt: &[SymbolWithRange]) -> PatternErrorWithRange {
        // Stop walking after the first failure.
        self.index = self.symbols.len();
        let text = excerpt.iter().map(SourceRangeMixin::content).join("");
        let start = excerpt.first().map_or(0, SourceRangeMixin::start);
        let end = excerpt.last().map_or(start, SourceRangeMixin::end);
        PatternError::MalformedPattern(text).into_wrapper_range(start..end)
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<SegmentWithRange<'a>, PatternErrorWithRange>;

    fn next(&mut self) -> Option<Self::Item> {
        let symbols = self.symbols;
        let first = symbols.get(self.index)?;
        let kind = match *first.content() {
            Symbol::Note(note) => {
                self.index += 1;
                return Some(Ok(Segment::Cell(note).into_wrapper(first)));
            }
            Symbol::Close(_) => return Some(Err(self.malformed(&symbols[self.index..=self.index]))),
            Symbol::Open(kind) => kind,
        };
        let rest = &symbols[self.index + 1..];
        let Some(close_at) = rest.iter().position(|s| s.content().is_grouping()) else {
            return Some(Err(self.malformed(&symbols[self.index..])));
        };
        let close = &rest[close_at];
        if *close.content() != Symbol::Close(kind) {
            let excerpt = &symbols[self.index..=self.index + 1 + close_at];
            return Some(Err(self.malformed(excerpt)));
        }
        let segment = Segment::Group {
            kind,
            interior: &rest[..close_at],
        };
        self.index += close_at + 2;
        Some(Ok(segment.into_wrapper_range(first.start()..close.end())))
    }
}

/// Expands the symbols into note-cell tokens.
///
/// The symbols should have passed [`super::validity::validate`] with the same config.
///
/// # Errors
///
/// Returns [`PatternError::MalformedPattern`] with the offending excerpt when the symbols have a
/// stray closing symbol, an unterminated or nested group, or an empty group that the config
/// rejects.
pub fn expand(
    symbols: &[SymbolWithRange],
    config: &CompileConfig,
) -> Result<Vec<NoteToken>, PatternErrorWithRange> {
    let mut tokens = Vec::with_capacity(symbols.len());
    for segment in Segments::new(symbols) {
        let segment = segment?;
        match *segment.content() {
            Segment::Cell(Note::Rest) => tokens.push(NoteToken::rest()),
            Segment::Cell(note) => tokens.push(NoteToken::on_beat(format!("1{}", note.as_char()))),
            Segment::Group { kind, interior } if interior.is_empty() => {
                match config.empty_group {
                    EmptyGroupWorkaround::Rest => tokens.push(NoteToken::rest()),
                    EmptyGroupWorkaround::Reject => {
                        let text = format!("{}{}", kind.open_char(), kind.close_char());
                        return Err(PatternError::MalformedPattern(text).into_wrapper(&segment));
                    }
                }
            }
            Segment::Group { kind, interior } => {
                let notes = interior
                    .iter()
                    .filter_map(|symbol| match symbol.content() {
                        Symbol::Note(note) => Some(*note),
                        _ => None,
                    })
                    .collect_vec();
                match kind {
                    GroupKind::Triplet => triplet::expand(&notes, &mut tokens),
                    GroupKind::Duplet => duplet::expand(&notes, &mut tokens),
                }
            }
        }
    }
    tracing::trace!(symbols = symbols.len(), tokens = tokens.len(), "expanded pattern");
    Ok(tokens)
}

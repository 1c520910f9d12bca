//! Definitions of the symbols in the pattern notation.

use super::super::mixin::SourceRangeMixin;

/// A single drum cell written in the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Note {
    /// `d`. A hit on the drum face.
    Don,
    /// `k`. A hit on the drum rim.
    Ka,
    /// ` `. No hit.
    Rest,
}

impl Note {
    /// Returns the character that writes this note in the notation.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Don => 'd',
            Self::Ka => 'k',
            Self::Rest => ' ',
        }
    }
}

/// The rhythmic subdivision that a group applies to its interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupKind {
    /// `(...)`. Divides the beat into thirds.
    Triplet,
    /// `[...]`. Divides the beat into halves.
    Duplet,
}

impl GroupKind {
    /// Returns the symbol opening this group.
    #[must_use]
    pub const fn open_char(self) -> char {
        match self {
            Self::Triplet => '(',
            Self::Duplet => '[',
        }
    }

    /// Returns the symbol closing this group.
    #[must_use]
    pub const fn close_char(self) -> char {
        match self {
            Self::Triplet => ')',
            Self::Duplet => ']',
        }
    }
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Triplet => write!(f, "triplet group `()`"),
            Self::Duplet => write!(f, "duplet group `[]`"),
        }
    }
}

/// A lexed symbol of the pattern notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// `k`, `d` or ` `.
    Note(Note),
    /// `(` or `[`.
    Open(GroupKind),
    /// `)` or `]`.
    Close(GroupKind),
}

/// A symbol with position information.
pub type SymbolWithRange = SourceRangeMixin<Symbol>;

impl Symbol {
    /// Reads a symbol from an already lowercased character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'd' => Self::Note(Note::Don),
            'k' => Self::Note(Note::Ka),
            ' ' => Self::Note(Note::Rest),
            '(' => Self::Open(GroupKind::Triplet),
            ')' => Self::Close(GroupKind::Triplet),
            '[' => Self::Open(GroupKind::Duplet),
            ']' => Self::Close(GroupKind::Duplet),
            _ => return None,
        })
    }

    /// Returns the character of this symbol in normalized form.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Note(note) => note.as_char(),
            Self::Open(kind) => kind.open_char(),
            Self::Close(kind) => kind.close_char(),
        }
    }

    /// Whether this symbol opens or closes a group.
    #[must_use]
    pub const fn is_grouping(self) -> bool {
        matches!(self, Self::Open(_) | Self::Close(_))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

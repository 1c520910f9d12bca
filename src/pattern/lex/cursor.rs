use std::str::Chars;

/// Walks the raw source one character at a time, keeping the character index.
pub struct Cursor<'a> {
    /// The index position in chars, NOT in bytes.
    index: usize,
    /// The remaining chars.
    chars: Chars<'a>,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            index: 0,
            chars: source.chars(),
        }
    }

    pub fn is_end(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Returns the current character index in the source string.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Move cursor, through and return the next character with its raw form and its
    /// lowercase form.
    ///
    /// The lowercase form is `None` when lowercasing does not yield exactly one character.
    pub fn next_char(&mut self) -> Option<(char, Option<char>)> {
        let raw = self.chars.next()?;
        self.index += 1;
        let mut lower = raw.to_lowercase();
        let normalized = match (lower.next(), lower.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };
        Some((raw, normalized))
    }
}

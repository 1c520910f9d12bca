//! Expansion of `[...]` groups, which divide the beat into halves.
//!
//! The cells of a duplet run are joined by `8` (an eighth note apart), alternating with `1` on
//! the beat. A run of even length ends off the beat, on `1/2`.

use crate::pattern::{
    lex::symbol::Note,
    token::{NoteToken, ONE_HALF},
};

/// Returns the number of tokens a duplet group with `len` notes expands to.
#[must_use]
pub const fn token_count(len: usize) -> usize {
    match len {
        0 | 1 => len,
        _ => len / 2 + 1,
    }
}

/// Expands the interior notes of a duplet group into `tokens`.
pub fn expand(notes: &[Note], tokens: &mut Vec<NoteToken>) {
    let len = notes.len();
    // 1-indexed, as the positions are counted from the opening symbol.
    let n = |k: usize| notes[k - 1].as_char();
    match len {
        0 => {}
        1 => tokens.push(NoteToken::on_beat(format!("1{}", n(1)))),
        // Runs of two to four notes are the same rules with a shorter middle.
        _ if len % 2 == 1 => {
            tokens.push(NoteToken::on_beat(format!("1{}8{}", n(1), n(2))));
            for y in (1..len - 2).step_by(2) {
                tokens.push(middle(n(y + 1), n(y + 2), n(y + 3)));
            }
            tokens.push(NoteToken::on_beat(format!("8{}1{}", n(len - 1), n(len))));
        }
        _ => {
            tokens.push(NoteToken::on_beat(format!("1{}8{}", n(1), n(2))));
            for y in (1..len - 1).step_by(2) {
                tokens.push(middle(n(y + 1), n(y + 2), n(y + 3)));
            }
            tokens.push(NoteToken::new(format!("8{}", n(len)), ONE_HALF));
        }
    }
}

fn middle(a: char, b: char, c: char) -> NoteToken {
    NoteToken::on_beat(format!("8{a}1{b}8{c}"))
}

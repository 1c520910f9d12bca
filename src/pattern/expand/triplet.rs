//! Expansion of `(...)` groups, which divide the beat into thirds.
//!
//! The cells of a triplet run are joined by `6` (a sixth note apart), and every third cell starts
//! back on the beat with `1`. Runs of two and three notes end off the beat, on `1/3` and `2/3`.

use crate::pattern::{
    lex::symbol::Note,
    token::{NoteToken, ONE_THIRD, TWO_THIRDS},
};

/// Returns the number of tokens a triplet group with `len` notes expands to.
#[must_use]
pub const fn token_count(len: usize) -> usize {
    let m = len / 3;
    match len % 3 {
        _ if len == 0 => 0,
        2 => 2 * m + 2,
        _ => 2 * m + 1,
    }
}

/// Expands the interior notes of a triplet group into `tokens`.
pub fn expand(notes: &[Note], tokens: &mut Vec<NoteToken>) {
    let len = notes.len();
    // 1-indexed, as the positions are counted from the opening symbol.
    let n = |k: usize| notes[k - 1].as_char();
    match len {
        0 => {}
        1 => tokens.push(NoteToken::on_beat(format!("1{}", n(1)))),
        _ if len % 3 == 2 => {
            tokens.push(NoteToken::on_beat(format!("1{}6{}", n(1), n(2))));
            for y in (2..len - 1).step_by(3) {
                tokens.push(NoteToken::on_beat(format!("6{}6{}", n(y), n(y + 1))));
                tokens.push(NoteToken::on_beat(format!(
                    "6{}1{}6{}",
                    n(y + 1),
                    n(y + 2),
                    n(y + 3)
                )));
            }
            tokens.push(NoteToken::new(format!("6{}2", n(len)), ONE_THIRD));
        }
        _ => {
            tokens.push(NoteToken::on_beat(format!("1{}6{}", n(1), n(2))));
            tokens.push(NoteToken::on_beat(format!("6{}6{}", n(2), n(3))));
            for y in (3..len - 1).step_by(3) {
                tokens.push(NoteToken::on_beat(format!(
                    "6{}1{}6{}",
                    n(y),
                    n(y + 1),
                    n(y + 2)
                )));
                tokens.push(NoteToken::on_beat(format!("6{}6{}", n(y + 2), n(y + 3))));
            }
            if len % 3 == 0 {
                tokens.push(NoteToken::new(format!("6{}1", n(len)), TWO_THIRDS));
            } else {
                tokens.push(NoteToken::on_beat(format!("6{}1{}", n(len - 1), n(len))));
            }
        }
    }
}

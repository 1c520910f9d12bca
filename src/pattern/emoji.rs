//! Mapping of note-cell tokens into a chat message made of custom emojis.
//!
//! Every token label names a custom emoji. An [`EmojiResolver`] looks up how the emoji is
//! written on the chat platform, and labels it does not know fall back to the `:label:`
//! shortcode.

use std::{borrow::Cow, collections::HashMap};

use super::{PatternError, token::NoteToken};

/// The length limit of a message on Discord, in characters.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Appended to every message so that the client lays the emojis out in a line.
pub const MESSAGE_TERMINATOR: char = '\u{200b}';

/// Looks up how the emoji of a label is written in a message.
pub trait EmojiResolver {
    /// Returns the emoji for the label, or `None` if the label has no emoji.
    fn resolve(&self, label: &str) -> Option<Cow<'_, str>>;
}

/// A resolver without any emoji, so every label falls back to its shortcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoEmojis;

impl EmojiResolver for NoEmojis {
    fn resolve(&self, _label: &str) -> Option<Cow<'_, str>> {
        None
    }
}

impl<S: std::hash::BuildHasher> EmojiResolver for HashMap<String, String, S> {
    fn resolve(&self, label: &str) -> Option<Cow<'_, str>> {
        self.get(label).map(|emoji| Cow::Borrowed(emoji.as_str()))
    }
}

impl<T: EmojiResolver + ?Sized> EmojiResolver for &T {
    fn resolve(&self, label: &str) -> Option<Cow<'_, str>> {
        (**self).resolve(label)
    }
}

/// Returns the shortcode of the label, as `:label:`.
#[must_use]
pub fn shortcode(label: &str) -> String {
    format!(":{label}:")
}

/// Writes the tokens as a message of emojis, followed by [`MESSAGE_TERMINATOR`].
///
/// # Errors
///
/// Returns [`PatternError::OutputTooLarge`] if the message is longer than `limit` characters.
pub fn render_message(
    tokens: &[NoteToken],
    resolver: &impl EmojiResolver,
    limit: usize,
) -> Result<String, PatternError> {
    let mut message = String::new();
    for token in tokens {
        match resolver.resolve(token.label()) {
            Some(emoji) => message.push_str(&emoji),
            None => message.push_str(&shortcode(token.label())),
        }
    }
    message.push(MESSAGE_TERMINATOR);
    let count = message.chars().count();
    if count > limit {
        tracing::debug!(count, limit, "emoji message too long");
        return Err(PatternError::OutputTooLarge { count, limit });
    }
    Ok(message)
}

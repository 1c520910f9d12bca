//! Prelude module for the pattern compiler.
//!
//! This module re-exports all public types of the pattern module for convenient access.
//! You can use `use taiko_pattern::pattern::prelude::*;` to import them at once.

// Re-export diagnostics from crate level
#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{ToAriadne, collect_pattern_reports, emit_pattern_errors};
pub use crate::diagnostics::SimpleSource;

pub use super::{
    PatternError, PatternErrorWithRange, compile, compile_with_config,
    config::{CompileConfig, EmptyGroupWorkaround, default_config},
    emoji::{
        DISCORD_MESSAGE_LIMIT, EmojiResolver, MESSAGE_TERMINATOR, NoEmojis, render_message,
        shortcode,
    },
    expand::{Segment, SegmentWithRange, Segments, expand},
    is_valid,
    lex::{
        lex,
        symbol::{GroupKind, Note, Symbol, SymbolWithRange},
    },
    measure,
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    token::{NoteToken, ON_BEAT, ONE_HALF, ONE_THIRD, Offset, REST_LABEL, TWO_THIRDS},
    validity::validate,
};

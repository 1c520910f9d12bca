//! Fancy diagnostics support using `ariadne`.
//!
//! This module converts errors carrying a
//! [`SourceRangeMixin`](crate::pattern::mixin::SourceRangeMixin) span, such as
//! [`PatternErrorWithRange`](crate::pattern::PatternErrorWithRange), into `ariadne::Report`.
//! The spans count characters, which is what ariadne expects by default, so it handles the
//! columns of the report itself.
//!
//! # Usage Example
//!
//! ```rust
//! # #[cfg(feature = "diagnostics")]
//! # {
//! use taiko_pattern::{diagnostics::emit_pattern_errors, pattern::compile};
//!
//! let source = "(kd)(kx)";
//! if let Err(err) = compile(source) {
//!     emit_pattern_errors("pattern", source, [&err]);
//! }
//! # }
//! ```

#[cfg(feature = "diagnostics")]
use ariadne::{Color, Label, Report, ReportKind, Source};

#[cfg(feature = "diagnostics")]
use crate::pattern::{PatternError, PatternErrorWithRange};

/// Simple source container that holds the name and text of a pattern.
///
/// # Usage Example
///
/// ```rust
/// use taiko_pattern::diagnostics::SimpleSource;
///
/// let source = SimpleSource::new("pattern", "(kd)d");
/// assert_eq!(source.name(), "pattern");
/// assert_eq!(source.text(), "(kd)d");
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source, such as the command that received it.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
#[cfg(feature = "diagnostics")]
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    ///
    /// # Parameters
    /// * `src` - Source container (used for the name, ariadne handles the columns)
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

/// Helper to build a styled ariadne `Report` consistently.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: std::ops::Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, std::ops::Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for PatternErrorWithRange {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let label = match self.content() {
            PatternError::InvalidCharacter(_) => "not a part of the notation",
            PatternError::DuplicateSymbol(_) => "repeated here",
            PatternError::UnbalancedCounts => "unbalanced symbols in here",
            PatternError::UnmatchedSymbol(_) => "nothing to close",
            PatternError::MismatchedSymbol { .. } => "closed by the other kind",
            PatternError::NestedGroup(_) => "opened inside a group",
            PatternError::UnbalancedStructure => "never closed",
            PatternError::EmptyGroup(_) => "no notes inside",
            PatternError::MalformedPattern(_) => "cannot be expanded",
            PatternError::OutputTooLarge { .. } => "expands to too many cells",
        };
        build_report(
            src,
            ReportKind::Error,
            self.range(),
            &format!("pattern: {}", self.content()),
            label,
            Color::Red,
        )
    }
}

/// Convenience method: batch render pattern errors to the standard error.
///
/// # Parameters
/// * `name` - Name of the source, used for display in diagnostic information
/// * `source` - Complete pattern text
/// * `errors` - List of errors to display
#[cfg(feature = "diagnostics")]
pub fn emit_pattern_errors<'a>(
    name: &'a str,
    source: &'a str,
    errors: impl IntoIterator<Item = &'a PatternErrorWithRange>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for err in errors {
        let report = err.to_report(&simple);
        let _ = report.eprint((name.to_string(), ariadne_source.clone()));
    }
}

/// Collect `ariadne::Report` instances for a list of pattern errors without printing.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn collect_pattern_reports<'a>(
    name: &'a str,
    source: &'a str,
    errors: impl IntoIterator<Item = &'a PatternErrorWithRange>,
) -> Vec<Report<'a, (String, std::ops::Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    errors.into_iter().map(|err| err.to_report(&simple)).collect()
}

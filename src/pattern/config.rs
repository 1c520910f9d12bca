//! Configuration of the pattern compiler.
//!
//! A [`CompileConfig`] is a plain value: it never reads environment state, so the same text with
//! the same config always compiles to the same tokens.

/// How to handle a group with nothing inside, such as `()` or `[]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmptyGroupWorkaround {
    /// Reject the pattern with [`super::PatternError::EmptyGroup`].
    #[default]
    Reject,
    /// Compile the empty group into a single rest cell.
    Rest,
}

/// Options for [`super::compile_with_config`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompileConfig {
    /// Handling of `()` and `[]`.
    pub empty_group: EmptyGroupWorkaround,
    /// The maximum number of tokens to emit. `None` means unlimited.
    pub max_tokens: Option<usize>,
}

impl CompileConfig {
    /// Sets the handling of empty groups.
    #[must_use]
    pub const fn empty_group(mut self, workaround: EmptyGroupWorkaround) -> Self {
        self.empty_group = workaround;
        self
    }

    /// Limits the number of tokens. Patterns expanding to more fail with
    /// [`super::PatternError::OutputTooLarge`] before any label is built.
    #[must_use]
    pub const fn max_tokens(mut self, limit: usize) -> Self {
        self.max_tokens = Some(limit);
        self
    }

    /// Removes the limit of the number of tokens.
    #[must_use]
    pub const fn unlimited(mut self) -> Self {
        self.max_tokens = None;
        self
    }
}

/// Returns the default config: empty groups are rejected and the output is unlimited.
#[must_use]
pub fn default_config() -> CompileConfig {
    CompileConfig::default()
}

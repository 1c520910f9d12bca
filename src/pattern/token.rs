//! Definitions of the note-cell token, the output of the compiler.

use std::path::{Path, PathBuf};

use num::{Zero, rational::Ratio};

/// Fractional position of a token within its rhythmic unit, in `[0, 1)`.
pub type Offset = Ratio<u32>;

/// Offset of cells starting on the beat.
pub const ON_BEAT: Offset = Ratio::new_raw(0, 1);
/// Offset of a cell one third into a triplet subdivision.
pub const ONE_THIRD: Offset = Ratio::new_raw(1, 3);
/// Offset of a cell two thirds into a triplet subdivision.
pub const TWO_THIRDS: Offset = Ratio::new_raw(2, 3);
/// Offset of a cell half way into a duplet subdivision.
pub const ONE_HALF: Offset = Ratio::new_raw(1, 2);

/// Label of the rest cell.
pub const REST_LABEL: &str = "bk";

/// One renderable unit of a drum pattern.
///
/// The label names a note-cell image or emoji, such as `1k`, `1k6d` or `6d2`. Renderers use the
/// offset to nudge the horizontal placement of the cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteToken {
    label: String,
    offset: Offset,
}

impl NoteToken {
    /// Creates a token.
    pub fn new(label: impl Into<String>, offset: Offset) -> Self {
        Self {
            label: label.into(),
            offset,
        }
    }

    /// Creates a token starting on the beat.
    pub fn on_beat(label: impl Into<String>) -> Self {
        Self::new(label, ON_BEAT)
    }

    /// Creates the rest cell.
    #[must_use]
    pub fn rest() -> Self {
        Self::on_beat(REST_LABEL)
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the offset.
    #[must_use]
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    /// Whether this token starts on the beat.
    #[must_use]
    pub fn is_on_beat(&self) -> bool {
        self.offset.is_zero()
    }

    /// Returns the file name of the image asset for this cell.
    #[must_use]
    pub fn asset_file_name(&self) -> String {
        format!("{}.png", self.label)
    }

    /// Returns the path of the image asset for this cell in the asset folder `dir`.
    pub fn asset_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.asset_file_name())
    }
}

impl<S: Into<String>> From<(S, Offset)> for NoteToken {
    fn from((label, offset): (S, Offset)) -> Self {
        Self::new(label, offset)
    }
}

impl std::fmt::Display for NoteToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_on_beat() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{}@{}", self.label, self.offset)
        }
    }
}

// record.rs - Per-codepoint property record and its field types.

use crate::breaks::BreakClass;

/// Number of Unicode codepoints; the table covers `[0, UNICODE_SPACE)`.
pub const UNICODE_SPACE: usize = 0x11_0000;

/// Highest valid codepoint (`UNICODE_SPACE - 1`).
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

// === Width ===

/// Display width class of a codepoint, per UAX #11 with the terminal
/// conventions applied (ambiguous and neutral are narrow, emoji are wide,
/// non-printables occupy no cells).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Width {
    /// Occupies no cells: combining marks, controls, unassigned codepoints.
    Zero = 0,
    /// One cell.
    #[default]
    Narrow = 1,
    /// Two cells: fullwidth and wide East Asian forms, emoji.
    Wide = 2,
}

impl Width {
    /// Number of display columns this width class occupies.
    pub const fn columns(self) -> usize {
        self as usize
    }
}

// === Control ===

/// Control classification of a codepoint.
///
/// Commands (C0, C1, and the paragraph separator) order strictly below
/// [`Control::NonControl`], formats strictly above; within each band the
/// derived ordering follows the index, which is assigned in ascending
/// codepoint order. Indices are `u16`, far wider than any real roster.
///
/// # Examples
///
/// ```
/// use graphoni::record::Control;
///
/// assert!(Control::Command(5) < Control::NonControl);
/// assert!(Control::NonControl < Control::Format(0));
/// assert!(Control::Command(0) < Control::Command(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Control {
    /// C0 or C1 control code or the paragraph separator.
    Command(u16),
    /// Not a control character.
    #[default]
    NonControl,
    /// Format-class control outside the command set.
    Format(u16),
}

impl Control {
    /// Returns `true` for the command band.
    pub const fn is_command(self) -> bool {
        matches!(self, Control::Command(_))
    }

    /// Returns `true` for the format band.
    pub const fn is_format(self) -> bool {
        matches!(self, Control::Format(_))
    }

    /// Returns `true` for anything except [`Control::NonControl`].
    pub const fn is_control(self) -> bool {
        !matches!(self, Control::NonControl)
    }
}

// === CodepointRecord ===

/// Properties of one codepoint: display width, grapheme break class, and
/// control classification.
///
/// Records compare and hash by all three fields; the catalog deduplicates
/// on that full structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodepointRecord {
    pub width: Width,
    pub break_class: BreakClass,
    pub control: Control,
}

impl CodepointRecord {
    /// The neutral record: narrow, no break constraints, not a control.
    ///
    /// Catalog entry 0 always holds this value, and out-of-range lookups
    /// resolve to it.
    pub const DEFAULT: CodepointRecord = CodepointRecord {
        width: Width::Narrow,
        break_class: BreakClass::Other,
        control: Control::NonControl,
    };
}

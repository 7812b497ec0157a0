// breaks.rs - Grapheme cluster break classes and the boundary rule chain.

// === BreakClass ===

/// Grapheme cluster break class, per UAX #29.
///
/// The ordinal layout is fixed: [`Cr`](BreakClass::Cr), [`Lf`](BreakClass::Lf)
/// and [`Control`](BreakClass::Control) are contiguous so rules GB4/GB5 can
/// test them with a single range comparison.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BreakClass {
    /// No break constraints.
    #[default]
    Other = 0,
    /// CARRIAGE RETURN.
    Cr = 1,
    /// LINE FEED.
    Lf = 2,
    /// Other control and separator codepoints.
    Control = 3,
    /// Combining marks, also Emoji_Modifier_Base.
    Extend = 4,
    /// Hangul leading consonant.
    L = 5,
    /// Hangul vowel.
    V = 6,
    /// Hangul trailing consonant.
    T = 7,
    /// Precomposed Hangul LV syllable.
    Lv = 8,
    /// Precomposed Hangul LVT syllable.
    Lvt = 9,
    /// Regional indicator (flag pair half).
    RegionalIndicator = 10,
    /// Spacing combining mark.
    SpacingMark = 11,
    /// Prefixed sign, stays the visible anchor of its cluster.
    Prepend = 12,
    /// ZERO WIDTH JOINER.
    Zwj = 13,
    /// Extended pictographic (emoji base).
    ExtendedPictographic = 14,
    /// Extended pictographic followed by ZWJ. Scan state only, never
    /// assigned to a codepoint.
    PictographicZwj = 15,
}

impl BreakClass {
    /// Map a break property value name from the Unicode data files.
    pub fn from_name(name: &str) -> Option<BreakClass> {
        Some(match name {
            "Other" => BreakClass::Other,
            "CR" => BreakClass::Cr,
            "LF" => BreakClass::Lf,
            "Control" => BreakClass::Control,
            "Extend" => BreakClass::Extend,
            "L" => BreakClass::L,
            "V" => BreakClass::V,
            "T" => BreakClass::T,
            "LV" => BreakClass::Lv,
            "LVT" => BreakClass::Lvt,
            "Regional_Indicator" => BreakClass::RegionalIndicator,
            "SpacingMark" => BreakClass::SpacingMark,
            "Prepend" => BreakClass::Prepend,
            "ZWJ" => BreakClass::Zwj,
            "Extended_Pictographic" => BreakClass::ExtendedPictographic,
            _ => return None,
        })
    }
}

// === Boundary rules ===

/// Grapheme cluster boundary test, UAX #29 rules GB3..GB999.
///
/// Returns whether `left` and `right` belong to the same cluster, and the
/// class to carry as `left` for the next pair. The carried class is what
/// makes a single left-to-right pass sufficient: it resets after a regional
/// indicator pair (GB12/13 pair up exactly two) and tracks the
/// pictographic-ZWJ state that GB11 needs.
///
/// # Examples
///
/// ```
/// use graphoni::breaks::{allied, BreakClass};
///
/// let (joined, carry) = allied(BreakClass::Cr, BreakClass::Lf);
/// assert!(joined);
/// assert_eq!(carry, BreakClass::Lf);
///
/// let (joined, _) = allied(BreakClass::Other, BreakClass::Control);
/// assert!(!joined);
/// ```
pub fn allied(left: BreakClass, right: BreakClass) -> (bool, BreakClass) {
    use BreakClass::*;

    let joined = if left == Cr && right == Lf {
        true // GB3
    } else if left >= Cr && left <= Control {
        false // GB4
    } else if right >= Cr && right <= Control {
        false // GB5
    } else if left == L && matches!(right, L | V | Lv | Lvt) {
        true // GB6
    } else if matches!(left, Lv | V) && matches!(right, V | T) {
        true // GB7
    } else if matches!(left, Lvt | T) && right == T {
        true // GB8
    } else if left == Prepend || matches!(right, Zwj | SpacingMark | Extend) {
        true // GB9, GB9a, GB9b
    } else if left == PictographicZwj && right == ExtendedPictographic {
        true // GB11
    } else if left == RegionalIndicator && right == RegionalIndicator {
        true // GB12, GB13
    } else {
        false // GB999
    };

    let carry = if left == ExtendedPictographic {
        match right {
            Extend => ExtendedPictographic,
            Zwj => PictographicZwj,
            _ => right,
        }
    } else if left == RegionalIndicator && right == RegionalIndicator {
        Other
    } else {
        right
    };

    (joined, carry)
}

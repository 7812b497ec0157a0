// error.rs - Error types for classification and table decoding.

use std::fmt;

// === ClassifyError ===

/// Error from the classification pipeline or the property source parsers.
///
/// Unrecognized property values are fatal on purpose: dropping them would
/// produce a table that silently mis-renders the affected codepoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// A property source used a value with no defined mapping.
    MissingProperty {
        /// Property the value belongs to, e.g. `East_Asian_Width`.
        property: &'static str,
        value: String,
        first: u32,
        last: u32,
    },
    /// A codepoint field that is not valid hexadecimal or is out of range.
    BadCodepoint { field: String },
    /// A script number field that is not a valid ISO 15924 numeric code.
    BadScriptCode { field: String },
    /// A `<.., Last>` range marker without a preceding `<.., First>` marker.
    UnpairedRangeMarker { code: u32 },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::MissingProperty {
                property,
                value,
                first,
                last,
            } => {
                if first == last {
                    write!(f, "no {} mapping for {:?} at U+{:04X}", property, value, first)
                } else {
                    write!(
                        f,
                        "no {} mapping for {:?} at U+{:04X}..U+{:04X}",
                        property, value, first, last
                    )
                }
            }
            ClassifyError::BadCodepoint { field } => {
                write!(f, "malformed codepoint field {:?}", field)
            }
            ClassifyError::BadScriptCode { field } => {
                write!(f, "malformed script number {:?}", field)
            }
            ClassifyError::UnpairedRangeMarker { code } => {
                write!(f, "range end marker at U+{:04X} without a start marker", code)
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

// === DecodeError ===

/// Error from expanding a compressed table stream.
///
/// Any of these means the artifact is corrupt; no partial table is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Expanded stream length differs from the declared count.
    LengthMismatch { expected: usize, actual: usize },
    /// Repeat marker at the end of the stream with no value to repeat.
    TruncatedRun,
    /// Repeat marker followed by another marker instead of a literal.
    NegativeLiteral { value: i32 },
    /// A value that does not fit the element width or points outside the
    /// structure it indexes.
    ValueRange { value: i64 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::LengthMismatch { expected, actual } => {
                write!(f, "expanded stream holds {} elements, {} declared", actual, expected)
            }
            DecodeError::TruncatedRun => write!(f, "repeat marker at end of stream"),
            DecodeError::NegativeLiteral { value } => {
                write!(f, "repeat marker followed by {}, expected a literal", value)
            }
            DecodeError::ValueRange { value } => {
                write!(f, "value {} out of range for the stream", value)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

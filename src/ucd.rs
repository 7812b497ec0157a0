// ucd.rs - Unicode Character Database line format parsing.
//
// The UCD files are semicolon-delimited fields with '#' comments. This
// module turns file contents (handed in as &str, retrieval is the caller's
// business) into the typed record sequences the classifier consumes. Lines
// whose field count does not match the source's arity are skipped the same
// way comment lines are; the data files end with such annotations.

use memchr::{memchr, memchr_iter};
use smallvec::SmallVec;

use crate::error::ClassifyError;
use crate::record::MAX_CODEPOINT;

/// Fields of one line, stack-allocated. UnicodeData.txt has 15 fields.
pub type Fields<'a> = SmallVec<[&'a str; 16]>;

/// Split one line into trimmed fields, stripping any `#` comment.
///
/// Returns `None` when nothing is left (blank or comment-only lines).
pub fn fields(line: &str) -> Option<Fields<'_>> {
    let data = match memchr(b'#', line.as_bytes()) {
        Some(at) => &line[..at],
        None => line,
    };
    if data.trim().is_empty() {
        return None;
    }
    let mut out = Fields::new();
    let mut start = 0;
    for at in memchr_iter(b';', data.as_bytes()) {
        out.push(data[start..at].trim());
        start = at + 1;
    }
    out.push(data[start..].trim());
    Some(out)
}

// === CodeRange ===

/// Inclusive codepoint range. Single codepoints are ranges of length one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeRange {
    pub first: u32,
    pub last: u32,
}

impl CodeRange {
    /// Range holding exactly one codepoint.
    pub const fn point(code: u32) -> CodeRange {
        CodeRange { first: code, last: code }
    }

    /// Parse the `XXXX` or `XXXX..YYYY` hex forms used throughout the UCD.
    pub fn parse(field: &str) -> Result<CodeRange, ClassifyError> {
        match field.find("..") {
            Some(at) => Ok(CodeRange {
                first: parse_code(&field[..at])?,
                last: parse_code(&field[at + 2..])?,
            }),
            None => Ok(CodeRange::point(parse_code(field)?)),
        }
    }

    /// Iterate the covered codepoints in ascending order.
    pub fn codepoints(self) -> std::ops::RangeInclusive<u32> {
        self.first..=self.last
    }

    /// Number of covered codepoints.
    pub fn len(self) -> usize {
        (self.last.saturating_sub(self.first) as usize) + 1
    }

    /// Always `false`; inclusive ranges hold at least one codepoint.
    pub fn is_empty(self) -> bool {
        false
    }

    /// Bounds-check against the Unicode space.
    ///
    /// [`CodeRange::parse`] never produces an out-of-range value; this
    /// covers ranges assembled directly from the struct fields.
    pub fn check(self) -> Result<(), ClassifyError> {
        let bad = if self.first > MAX_CODEPOINT {
            self.first
        } else if self.last > MAX_CODEPOINT {
            self.last
        } else {
            return Ok(());
        };
        Err(ClassifyError::BadCodepoint {
            field: format!("{:04X}", bad),
        })
    }
}

/// Parse one hex codepoint field, bounds-checked against the Unicode space.
pub fn parse_code(field: &str) -> Result<u32, ClassifyError> {
    let code = u32::from_str_radix(field.trim(), 16).map_err(|_| ClassifyError::BadCodepoint {
        field: field.to_string(),
    })?;
    if code > MAX_CODEPOINT {
        return Err(ClassifyError::BadCodepoint {
            field: field.to_string(),
        });
    }
    Ok(code)
}

// === Typed entries ===

/// One UnicodeData.txt entry: codepoint, display name, general category.
///
/// Names keep their raw form, including the `<.., First>` / `<.., Last>`
/// range markers the classifier merges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharEntry {
    pub code: u32,
    pub name: String,
    pub category: String,
}

/// One `range; value` entry from a property file (East Asian Width,
/// grapheme break classes, emoji properties, scripts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRun {
    pub range: CodeRange,
    pub value: String,
}

/// One NameAliases.txt entry: codepoint, alias, alias kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub code: u32,
    pub alias: String,
    pub kind: String,
}

/// One ISO 15924 registry entry: numeric code, English name, property value
/// alias (the spelling Scripts.txt uses, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptName {
    pub number: u16,
    pub name: String,
    pub pva: String,
}

// === Per-source parsers ===

/// Parse UnicodeData.txt content (15 fields per line).
pub fn parse_unicode_data(text: &str) -> Result<Vec<CharEntry>, ClassifyError> {
    let mut out = Vec::new();
    for line in text.lines() {
        let f = match fields(line) {
            Some(f) if f.len() == 15 => f,
            _ => continue,
        };
        out.push(CharEntry {
            code: parse_code(f[0])?,
            name: f[1].to_string(),
            category: f[2].to_string(),
        });
    }
    Ok(out)
}

/// Parse a two-field `range; value` property file.
pub fn parse_property_ranges(text: &str) -> Result<Vec<PropertyRun>, ClassifyError> {
    let mut out = Vec::new();
    for line in text.lines() {
        let f = match fields(line) {
            Some(f) if f.len() == 2 => f,
            _ => continue,
        };
        out.push(PropertyRun {
            range: CodeRange::parse(f[0])?,
            value: f[1].to_string(),
        });
    }
    Ok(out)
}

/// Parse NameAliases.txt content (3 fields per line).
pub fn parse_name_aliases(text: &str) -> Result<Vec<AliasEntry>, ClassifyError> {
    let mut out = Vec::new();
    for line in text.lines() {
        let f = match fields(line) {
            Some(f) if f.len() == 3 => f,
            _ => continue,
        };
        out.push(AliasEntry {
            code: parse_code(f[0])?,
            alias: f[1].to_string(),
            kind: f[2].to_string(),
        });
    }
    Ok(out)
}

/// Parse the ISO 15924 registry (7 fields per line: alpha-4 code, numeric
/// code, English name, French name, property value alias, version, date).
pub fn parse_iso15924(text: &str) -> Result<Vec<ScriptName>, ClassifyError> {
    let mut out = Vec::new();
    for line in text.lines() {
        let f = match fields(line) {
            Some(f) if f.len() == 7 => f,
            _ => continue,
        };
        let number = f[1].parse::<u16>().map_err(|_| ClassifyError::BadScriptCode {
            field: f[1].to_string(),
        })?;
        out.push(ScriptName {
            number,
            name: f[2].to_string(),
            pva: f[4].to_string(),
        });
    }
    Ok(out)
}

// segment.rs - Grapheme cluster iteration driven by the lookup table.

use std::str::CharIndices;

use crate::breaks::allied;
use crate::record::{CodepointRecord, Width};
use crate::table::Table;

/// One grapheme cluster of the segmented text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grapheme<'a> {
    /// Byte offset of the cluster in the source text.
    pub offset: usize,
    /// The cluster itself.
    pub text: &'a str,
    /// Width of the widest codepoint in the cluster.
    pub width: Width,
    /// Number of codepoints folded into the cluster.
    pub codepoints: usize,
}

/// Iterator over the grapheme clusters of a string, created by
/// [`Table::graphemes`].
///
/// Each step folds [`allied`] over consecutive codepoints, carrying the
/// joining state forward until the rules call for a boundary. The first
/// codepoint past the boundary seeds the next cluster.
#[derive(Debug)]
pub struct Graphemes<'a> {
    table: &'a Table,
    text: &'a str,
    chars: CharIndices<'a>,
    pending: Option<(usize, char, CodepointRecord)>,
}

impl<'a> Graphemes<'a> {
    pub(crate) fn new(table: &'a Table, text: &'a str) -> Graphemes<'a> {
        let mut chars = text.char_indices();
        let pending = chars
            .next()
            .map(|(offset, ch)| (offset, ch, table.record(ch)));
        Graphemes {
            table,
            text,
            chars,
            pending,
        }
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = Grapheme<'a>;

    fn next(&mut self) -> Option<Grapheme<'a>> {
        let (start, first, record) = self.pending.take()?;
        let mut carry = record.break_class;
        let mut width = record.width;
        let mut end = start + first.len_utf8();
        let mut codepoints = 1;
        for (offset, ch) in self.chars.by_ref() {
            let record = self.table.record(ch);
            let (joined, next) = allied(carry, record.break_class);
            if !joined {
                self.pending = Some((offset, ch, record));
                break;
            }
            carry = next;
            width = width.max(record.width);
            end = offset + ch.len_utf8();
            codepoints += 1;
        }
        Some(Grapheme {
            offset: start,
            text: &self.text[start..end],
            width,
            codepoints,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every cluster holds at least one char and every char at least
        // one byte.
        let buffered = usize::from(self.pending.is_some());
        (buffered, Some(buffered + self.chars.as_str().len()))
    }
}

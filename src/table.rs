// table.rs - Expanded lookup table over the compressed streams.

use std::fmt;

use log::debug;

use crate::encode::{OffsetWidth, TableData, BLOCK_COUNT, BLOCK_SIZE};
use crate::error::DecodeError;
use crate::record::{CodepointRecord, MAX_CODEPOINT};
use crate::rle;
use crate::segment::Graphemes;

/// Offset elements expanded at the width the catalog size dictates.
enum OffsetArray {
    U8(Box<[u8]>),
    U16(Box<[u16]>),
}

impl OffsetArray {
    fn len(&self) -> usize {
        match self {
            OffsetArray::U8(elements) => elements.len(),
            OffsetArray::U16(elements) => elements.len(),
        }
    }

    fn get(&self, index: usize) -> usize {
        match self {
            OffsetArray::U8(elements) => elements[index] as usize,
            OffsetArray::U16(elements) => elements[index] as usize,
        }
    }
}

/// The expanded three-layer table. Lookups are two array reads and never
/// fail: [`Table::build`] verifies every block pointer and catalog index
/// up front, so a `Table` that exists is a `Table` that cannot go out of
/// bounds.
///
/// # Examples
///
/// ```
/// use graphoni::encode::encode;
/// use graphoni::record::{CodepointRecord, Width, UNICODE_SPACE};
/// use graphoni::table::Table;
///
/// let mut records = vec![CodepointRecord::DEFAULT; UNICODE_SPACE];
/// records[0x4E00].width = Width::Wide;
/// let table = Table::build(&encode(&records)).unwrap();
/// assert_eq!(table.lookup(0x4E00).width, Width::Wide);
/// assert_eq!(table.lookup(0x41).width, Width::Narrow);
/// assert_eq!(table.lookup(0x20_0000), CodepointRecord::DEFAULT);
/// ```
pub struct Table {
    catalog: Box<[CodepointRecord]>,
    offsets: OffsetArray,
    blocks: Box<[u32]>,
}

impl Table {
    /// Expand and verify the compressed streams.
    ///
    /// Stream lengths must match their declared counts (the offset count
    /// itself is capped at one block per page), every block pointer must
    /// leave room for a full block inside the offset array, and every
    /// offset must index into the catalog.
    pub fn build(data: &TableData) -> Result<Table, DecodeError> {
        if data.block_count != BLOCK_COUNT {
            return Err(DecodeError::LengthMismatch {
                expected: BLOCK_COUNT,
                actual: data.block_count,
            });
        }
        // At most one distinct block per page exists, so no valid stream
        // declares more offsets than the whole space holds.
        if data.offset_count > BLOCK_COUNT * BLOCK_SIZE {
            return Err(DecodeError::ValueRange {
                value: data.offset_count as i64,
            });
        }
        let blocks = rle::unpack::<u32>(&data.blocks, data.block_count)?.into_boxed_slice();
        let offsets = match data.offset_width() {
            OffsetWidth::U8 => {
                OffsetArray::U8(rle::unpack::<u8>(&data.offsets, data.offset_count)?.into_boxed_slice())
            }
            OffsetWidth::U16 => {
                OffsetArray::U16(rle::unpack::<u16>(&data.offsets, data.offset_count)?.into_boxed_slice())
            }
        };

        for &pointer in blocks.iter() {
            if pointer as usize + BLOCK_SIZE > offsets.len() {
                return Err(DecodeError::ValueRange { value: pointer as i64 });
            }
        }
        for index in 0..offsets.len() {
            let offset = offsets.get(index);
            if offset >= data.catalog.len() {
                return Err(DecodeError::ValueRange { value: offset as i64 });
            }
        }

        debug!(
            "expanded {} offsets and {} block pointers over {} catalog entries",
            offsets.len(),
            blocks.len(),
            data.catalog.len()
        );
        Ok(Table {
            catalog: data.catalog.clone().into_boxed_slice(),
            offsets,
            blocks,
        })
    }

    /// Record for codepoint `cp`. Values past the Unicode space resolve to
    /// the neutral default at catalog entry 0.
    pub fn lookup(&self, cp: u32) -> CodepointRecord {
        if cp > MAX_CODEPOINT {
            return self.catalog[0];
        }
        let pointer = self.blocks[(cp >> 8) as usize] as usize;
        self.catalog[self.offsets.get(pointer + (cp & 0xFF) as usize)]
    }

    /// Record for a char, as [`Table::lookup`] of its scalar value.
    pub fn record(&self, ch: char) -> CodepointRecord {
        self.lookup(ch as u32)
    }

    /// Iterate over the grapheme clusters of `text`.
    pub fn graphemes<'a>(&'a self, text: &'a str) -> Graphemes<'a> {
        Graphemes::new(self, text)
    }

    /// Display columns `text` occupies: the sum of its cluster widths,
    /// where each cluster is as wide as its widest codepoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphoni::classify::{classify, Overrides, Sources};
    /// use graphoni::encode::encode;
    /// use graphoni::table::Table;
    /// use graphoni::ucd::{CodeRange, PropertyRun};
    ///
    /// let mut sources = Sources::default();
    /// sources.unicode_data.push(graphoni::ucd::CharEntry {
    ///     code: 0x65,
    ///     name: "LATIN SMALL LETTER E".to_string(),
    ///     category: "Ll".to_string(),
    /// });
    /// sources.unicode_data.push(graphoni::ucd::CharEntry {
    ///     code: 0x301,
    ///     name: "COMBINING ACUTE ACCENT".to_string(),
    ///     category: "Mn".to_string(),
    /// });
    /// sources.grapheme_breaks.push(PropertyRun {
    ///     range: CodeRange::point(0x301),
    ///     value: "Extend".to_string(),
    /// });
    /// let records = classify(&sources, &Overrides::none()).unwrap().into_records();
    /// let table = Table::build(&encode(&records)).unwrap();
    /// assert_eq!(table.text_width("e\u{301}"), 1);
    /// ```
    pub fn text_width(&self, text: &str) -> usize {
        self.graphemes(text)
            .map(|grapheme| grapheme.width.columns())
            .sum()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("catalog", &self.catalog.len())
            .field("offsets", &self.offsets.len())
            .field("blocks", &self.blocks.len())
            .finish_non_exhaustive()
    }
}

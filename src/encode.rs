// encode.rs - Compresses the record array into catalog, offsets, and blocks.
//
// Three layers: a catalog of distinct records, 256-element index blocks
// deduplicated by content, and a top-level block pointer per 256-codepoint
// page. The two index streams ship run-packed through [`crate::rle`].

use std::collections::HashMap;

use log::debug;

use crate::record::{CodepointRecord, UNICODE_SPACE};
use crate::rle;

/// Codepoints per block, and the shift/mask split used by lookup.
pub const BLOCK_SIZE: usize = 0x100;

/// Number of blocks covering the Unicode space.
pub const BLOCK_COUNT: usize = UNICODE_SPACE / BLOCK_SIZE;

// === Offset width ===

/// Element width of the offset stream, picked from the catalog size so
/// every catalog index fits the narrower type when it can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetWidth {
    U8,
    U16,
}

impl OffsetWidth {
    /// Smallest width that holds every index into a catalog of `len` entries.
    pub fn for_catalog(len: usize) -> OffsetWidth {
        if len > 0x100 {
            OffsetWidth::U16
        } else {
            OffsetWidth::U8
        }
    }
}

// === Encoded form ===

/// The compressed table: what a generated source file would carry.
///
/// `offsets` and `blocks` are run-packed; `offset_count` and `block_count`
/// give their expanded lengths. `block_count` is always [`BLOCK_COUNT`],
/// kept explicit so decoding can verify the streams it was handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub catalog: Vec<CodepointRecord>,
    pub offsets: Vec<i32>,
    pub blocks: Vec<i32>,
    pub offset_count: usize,
    pub block_count: usize,
}

impl TableData {
    /// Width of the expanded offset elements for this catalog.
    pub fn offset_width(&self) -> OffsetWidth {
        OffsetWidth::for_catalog(self.catalog.len())
    }
}

/// Compress a full record array.
///
/// The catalog is seeded with the neutral default at index 0 before any
/// record is scanned, so index 0 means the same thing in every build no
/// matter which records the sources produced. Every further entry appears
/// in first-seen scan order.
///
/// # Panics
///
/// Panics if `records` does not hold exactly one record per codepoint, or
/// if the sources produce more than 65536 distinct records.
///
/// # Examples
///
/// ```
/// use graphoni::encode::{encode, OffsetWidth};
/// use graphoni::record::{CodepointRecord, UNICODE_SPACE};
///
/// let records = vec![CodepointRecord::DEFAULT; UNICODE_SPACE];
/// let data = encode(&records);
/// assert_eq!(data.catalog.len(), 1);
/// assert_eq!(data.offset_width(), OffsetWidth::U8);
/// ```
pub fn encode(records: &[CodepointRecord]) -> TableData {
    assert_eq!(
        records.len(),
        UNICODE_SPACE,
        "encode expects one record per codepoint"
    );

    let mut catalog = vec![CodepointRecord::DEFAULT];
    let mut catalog_index: HashMap<CodepointRecord, u16> = HashMap::new();
    catalog_index.insert(CodepointRecord::DEFAULT, 0);

    let mut offsets: Vec<u16> = Vec::new();
    let mut block_index: HashMap<Vec<u16>, u32> = HashMap::new();
    let mut blocks: Vec<u32> = Vec::with_capacity(BLOCK_COUNT);

    for chunk in records.chunks_exact(BLOCK_SIZE) {
        let block: Vec<u16> = chunk
            .iter()
            .map(|record| match catalog_index.get(record) {
                Some(&index) => index,
                None => {
                    assert!(catalog.len() <= u16::MAX as usize, "record catalog overflow");
                    let index = catalog.len() as u16;
                    catalog.push(*record);
                    catalog_index.insert(*record, index);
                    index
                }
            })
            .collect();
        let pointer = match block_index.get(&block) {
            Some(&pointer) => pointer,
            None => {
                let pointer = offsets.len() as u32;
                offsets.extend_from_slice(&block);
                block_index.insert(block, pointer);
                pointer
            }
        };
        blocks.push(pointer);
    }

    let offset_count = offsets.len();
    debug!(
        "encoded {} catalog entries, {} distinct blocks",
        catalog.len(),
        offset_count / BLOCK_SIZE
    );

    TableData {
        catalog,
        offsets: rle::pack(offsets.iter().map(|&value| value as i32)),
        blocks: rle::pack(blocks.iter().map(|&value| value as i32)),
        offset_count,
        block_count: BLOCK_COUNT,
    }
}

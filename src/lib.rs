//! # Graphoni
//!
//! Unicode codepoint classification behind a compressed three-layer lookup
//! table, with grapheme cluster segmentation and terminal display-width
//! measurement driven by it.
//!
//! The [`classify`] pipeline merges Unicode Character Database property
//! files into one record per codepoint (display width, grapheme break
//! class, control classification). [`encode`] deduplicates the full array
//! into a catalog of distinct records plus two run-packed index streams,
//! and [`table::Table`] expands those streams back into a structure that
//! answers any codepoint in two array reads.
//!
//! ## Quick Start
//!
//! Feed it excerpts (or the full files) from the Unicode Character
//! Database; anything the sources leave unassigned renders as invisible.
//!
//! ```rust
//! use graphoni::prelude::*;
//! use graphoni::ucd;
//!
//! let mut sources = Sources::default();
//! sources.unicode_data = ucd::parse_unicode_data(
//!     "0065;LATIN SMALL LETTER E;Ll;0;L;;;;;N;;;0045;;0045\n\
//!      0301;COMBINING ACUTE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING ACUTE;;;;\n\
//!      4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;\n\
//!      9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;",
//! )
//! .unwrap();
//! sources.grapheme_breaks = ucd::parse_property_ranges(
//!     "0300..036F    ; Extend # Mn  [112] COMBINING GRAVE ACCENT..",
//! )
//! .unwrap();
//! sources.east_asian_width = ucd::parse_property_ranges("4E00..9FFF ; W").unwrap();
//!
//! let records = classify(&sources, &Overrides::default()).unwrap().into_records();
//! let table = Table::build(&encode(&records)).unwrap();
//!
//! assert_eq!(table.text_width("\u{4E2D}\u{6587}"), 4);
//! assert_eq!(table.text_width("e\u{301}"), 1);
//! assert_eq!(table.graphemes("e\u{301}").count(), 1);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`ucd`] | Property file parsing |
//! | [`classify`] | Pipeline merging the sources into records |
//! | [`record`] | Per-codepoint record and its field types |
//! | [`category`] | General categories and category sets |
//! | [`breaks`] | Break classes and the cluster joining rules |
//! | [`encode`] | Catalog, offset, and block compression |
//! | [`rle`] | Run packing of the index streams |
//! | [`table`] | Expanded constant-time lookup table |
//! | [`segment`] | Grapheme cluster iteration |
//! | [`script`] | ISO 15924 script numbers |
//! | [`error`] | Error types |
//! | [`prelude`] | Convenient re-exports |

pub mod breaks;
pub mod category;
pub mod classify;
pub mod encode;
pub mod error;
pub mod prelude;
pub mod record;
pub mod rle;
pub mod script;
pub mod segment;
pub mod table;
pub mod ucd;

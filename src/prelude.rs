// prelude.rs - Convenient re-exports for the common build-and-measure flow.
//
//! # Prelude
//!
//! ```
//! use graphoni::prelude::*;
//!
//! let records = vec![CodepointRecord::DEFAULT; UNICODE_SPACE];
//! let table = Table::build(&encode(&records)).unwrap();
//! assert_eq!(table.text_width("abc"), 3);
//! ```

pub use crate::breaks::BreakClass;
pub use crate::classify::{classify, Classification, Overrides, Sources};
pub use crate::encode::{encode, TableData};
pub use crate::error::{ClassifyError, DecodeError};
pub use crate::record::{CodepointRecord, Control, Width, MAX_CODEPOINT, UNICODE_SPACE};
pub use crate::segment::{Grapheme, Graphemes};
pub use crate::table::Table;

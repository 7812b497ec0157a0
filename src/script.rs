// script.rs - ISO 15924 script numbers per codepoint.
//
// Scripts ride beside the core record table: their own assignment pass,
// their own packed stream, their own expanded array. A packed element
// carries the run length in the high 16 bits and the script number in the
// low 16.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::{ClassifyError, DecodeError};
use crate::record::{MAX_CODEPOINT, UNICODE_SPACE};
use crate::ucd::{PropertyRun, ScriptName};

/// ISO 15924 number for unassigned and uncoded codepoints (`Zzzz`).
pub const UNKNOWN_SCRIPT: u16 = 999;

/// Script property values as they appear in the property file: the short
/// name with spaces and hyphens as underscores.
fn normalize(name: &str) -> String {
    name.replace([' ', '-'], "_")
}

/// Map script property values to ISO 15924 numbers.
///
/// Keys prefer the registered property value alias; entries without one
/// fall back to the normalized English name.
pub fn script_numbers(names: &[ScriptName]) -> HashMap<String, u16> {
    let mut numbers = HashMap::with_capacity(names.len());
    for entry in names {
        let key = if entry.pva.is_empty() {
            normalize(&entry.name)
        } else {
            entry.pva.clone()
        };
        numbers.insert(key, entry.number);
    }
    numbers
}

/// Resolve the script runs into one number per codepoint.
///
/// Codepoints outside every run keep [`UNKNOWN_SCRIPT`]. A run naming a
/// script absent from the ISO registry is fatal, as is a run reaching
/// past the Unicode space.
pub fn assign_scripts(
    runs: &[PropertyRun],
    names: &[ScriptName],
) -> Result<Vec<u16>, ClassifyError> {
    let numbers = script_numbers(names);
    let mut scripts = vec![UNKNOWN_SCRIPT; UNICODE_SPACE];
    for run in runs {
        let number = match numbers.get(run.value.as_str()) {
            Some(&number) => number,
            None => {
                return Err(ClassifyError::MissingProperty {
                    property: "Script",
                    value: run.value.clone(),
                    first: run.range.first,
                    last: run.range.last,
                })
            }
        };
        run.range.check()?;
        for cp in run.range.codepoints() {
            scripts[cp as usize] = number;
        }
    }
    debug!("assigned {} script runs over {:#x} codepoints", runs.len(), UNICODE_SPACE);
    Ok(scripts)
}

/// Pack the script array into run elements, splitting any run longer than
/// the 16-bit length field.
///
/// # Panics
///
/// Panics if `scripts` does not hold one number per codepoint.
pub fn encode_scripts(scripts: &[u16]) -> Vec<u32> {
    assert_eq!(
        scripts.len(),
        UNICODE_SPACE,
        "encode_scripts expects one number per codepoint"
    );
    let mut packed = Vec::new();
    let mut current = scripts[0];
    let mut run: u32 = 0;
    for &code in scripts {
        if code == current && run < 0xFFFF {
            run += 1;
        } else {
            packed.push((run << 16) | current as u32);
            current = code;
            run = 1;
        }
    }
    packed.push((run << 16) | current as u32);
    packed
}

/// Expanded script numbers, one per codepoint.
pub struct ScriptTable {
    codes: Box<[u16]>,
}

impl ScriptTable {
    /// Expand a packed stream and verify it covers the Unicode space
    /// exactly.
    pub fn build(packed: &[u32]) -> Result<ScriptTable, DecodeError> {
        let mut codes = Vec::with_capacity(UNICODE_SPACE);
        for &element in packed {
            let run = (element >> 16) as usize;
            if codes.len() + run > UNICODE_SPACE {
                return Err(DecodeError::LengthMismatch {
                    expected: UNICODE_SPACE,
                    actual: codes.len() + run,
                });
            }
            let code = (element & 0xFFFF) as u16;
            codes.resize(codes.len() + run, code);
        }
        if codes.len() != UNICODE_SPACE {
            return Err(DecodeError::LengthMismatch {
                expected: UNICODE_SPACE,
                actual: codes.len(),
            });
        }
        Ok(ScriptTable {
            codes: codes.into_boxed_slice(),
        })
    }

    /// Script number for `cp`; out-of-range values are [`UNKNOWN_SCRIPT`].
    pub fn lookup(&self, cp: u32) -> u16 {
        if cp > MAX_CODEPOINT {
            return UNKNOWN_SCRIPT;
        }
        self.codes[cp as usize]
    }
}

impl fmt::Debug for ScriptTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptTable")
            .field("codes", &self.codes.len())
            .finish_non_exhaustive()
    }
}

// classify.rs - Merges the property sources into one record per codepoint.
//
// Stage order is fixed and load-bearing: later stages refine earlier ones
// wherever ranges overlap, so resolution of overlapping assignments is
// last-writer-wins by pipeline position, never an error.

use std::rc::Rc;

use log::debug;

use crate::breaks::BreakClass;
use crate::category::{Category, CategorySet};
use crate::error::ClassifyError;
use crate::record::{CodepointRecord, Control, Width, MAX_CODEPOINT, UNICODE_SPACE};
use crate::ucd::{AliasEntry, CharEntry, CodeRange, PropertyRun};

// === Sources ===

/// Parsed property sources feeding the pipeline, in the shape the [`crate::ucd`]
/// parsers produce. Empty sources are valid; every codepoint then keeps the
/// neutral default.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    /// UnicodeData.txt entries: general category and display name.
    pub unicode_data: Vec<CharEntry>,
    /// EastAsianWidth.txt runs.
    pub east_asian_width: Vec<PropertyRun>,
    /// GraphemeBreakProperty.txt runs.
    pub grapheme_breaks: Vec<PropertyRun>,
    /// emoji-data.txt runs.
    pub emoji: Vec<PropertyRun>,
    /// NameAliases.txt entries.
    pub name_aliases: Vec<AliasEntry>,
}

// === Overrides ===

/// One hand-maintained patch. Fields left `None` keep the pipeline's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub range: CodeRange,
    pub width: Option<Width>,
    pub category: Option<Category>,
    pub break_class: Option<BreakClass>,
}

/// The custom override list, applied after every property source and before
/// the derivation stages. Overrides win unconditionally for their ranges.
///
/// This is configuration, not law: [`Overrides::default`] carries the
/// maintained list, callers may extend or replace it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overrides {
    entries: Vec<Override>,
}

impl Overrides {
    /// The empty list.
    pub fn none() -> Overrides {
        Overrides { entries: Vec::new() }
    }

    /// Append one patch.
    pub fn push(mut self, entry: Override) -> Overrides {
        self.entries.push(entry);
        self
    }

    /// The patches in application order.
    pub fn entries(&self) -> &[Override] {
        &self.entries
    }
}

impl Default for Overrides {
    /// The maintained list: ZWSP and ZWNJ join the cluster they follow, as
    /// does the direct-input page U+D0000..U+D0FFF. All three become
    /// zero-width nonspacing marks with break class Extend.
    fn default() -> Overrides {
        fn extend_mark(range: CodeRange) -> Override {
            Override {
                range,
                width: Some(Width::Zero),
                category: Some(Category::Mn),
                break_class: Some(BreakClass::Extend),
            }
        }
        Overrides {
            entries: vec![
                extend_mark(CodeRange::point(0x200B)),
                extend_mark(CodeRange::point(0x200C)),
                extend_mark(CodeRange { first: 0xD_0000, last: 0xD_0FFF }),
            ],
        }
    }
}

// === Classification ===

/// One indexed control codepoint of the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlInfo {
    pub code: u32,
    pub control: Control,
    /// Short alias when the sources carry one, otherwise the display name.
    /// Empty if the sources name the codepoint nowhere.
    pub name: String,
}

/// Output of the pipeline: the full record array plus the control roster.
#[derive(Debug, Clone)]
pub struct Classification {
    records: Vec<CodepointRecord>,
    controls: Vec<ControlInfo>,
}

impl Classification {
    /// One record per codepoint, indexed by codepoint value.
    pub fn records(&self) -> &[CodepointRecord] {
        &self.records
    }

    /// Record for `cp`; out-of-range values return the neutral default.
    pub fn record(&self, cp: u32) -> CodepointRecord {
        self.records
            .get(cp as usize)
            .copied()
            .unwrap_or(CodepointRecord::DEFAULT)
    }

    /// Indexed controls ordered by control index: commands first, then
    /// formats, each band in ascending codepoint order.
    pub fn controls(&self) -> &[ControlInfo] {
        &self.controls
    }

    /// Consume into the bare record array.
    pub fn into_records(self) -> Vec<CodepointRecord> {
        self.records
    }
}

// === Pipeline ===

/// Scratch state per codepoint while the stages run.
#[derive(Clone, Default)]
struct Draft {
    category: Category,
    width: Width,
    break_class: BreakClass,
    control: Control,
    name: Option<Rc<str>>,
    alias: Option<Rc<str>>,
}

/// Run the full pipeline over the property sources.
///
/// Every range a stage is about to fill is bounds-checked first, so
/// hand-assembled sources reaching past the Unicode space fail the way
/// parsed ones do.
///
/// # Examples
///
/// ```
/// use graphoni::classify::{classify, Overrides, Sources};
/// use graphoni::record::Width;
/// use graphoni::ucd::{CharEntry, CodeRange, PropertyRun};
///
/// let mut sources = Sources::default();
/// sources.unicode_data.push(CharEntry {
///     code: 0x4E2D,
///     name: "CJK UNIFIED IDEOGRAPH-4E2D".to_string(),
///     category: "Lo".to_string(),
/// });
/// sources.east_asian_width.push(PropertyRun {
///     range: CodeRange::parse("4E00..9FFF").unwrap(),
///     value: "W".to_string(),
/// });
/// let classification = classify(&sources, &Overrides::none()).unwrap();
/// assert_eq!(classification.record(0x4E2D).width, Width::Wide);
/// // Codepoints no source covers stay unassigned and occupy no cells.
/// assert_eq!(classification.record(0x41).width, Width::Zero);
/// ```
pub fn classify(sources: &Sources, overrides: &Overrides) -> Result<Classification, ClassifyError> {
    let mut drafts = vec![Draft::default(); UNICODE_SPACE];

    apply_categories(&mut drafts, &sources.unicode_data)?;
    apply_widths(&mut drafts, &sources.east_asian_width)?;
    apply_breaks(&mut drafts, &sources.grapheme_breaks)?;
    apply_emoji(&mut drafts, &sources.emoji)?;
    apply_aliases(&mut drafts, &sources.name_aliases)?;
    apply_overrides(&mut drafts, overrides);
    apply_nonprintable(&mut drafts);
    let controls = index_controls(&mut drafts);

    let records = drafts
        .iter()
        .map(|draft| CodepointRecord {
            width: draft.width,
            break_class: draft.break_class,
            control: draft.control,
        })
        .collect();

    debug!(
        "classified {:#x} codepoints, {} indexed controls",
        UNICODE_SPACE,
        controls.len()
    );
    Ok(Classification { records, controls })
}

/// Category and name assignment, merging `<.., First>`/`<.., Last>` pairs
/// into one contiguous range.
fn apply_categories(drafts: &mut [Draft], entries: &[CharEntry]) -> Result<(), ClassifyError> {
    let mut range_start: Option<u32> = None;
    for entry in entries {
        let category = match Category::from_abbr(&entry.category) {
            Some(category) => category,
            None => {
                return Err(ClassifyError::MissingProperty {
                    property: "General_Category",
                    value: entry.category.clone(),
                    first: entry.code,
                    last: entry.code,
                })
            }
        };
        let range = if entry.name.ends_with(", First>") {
            range_start = Some(entry.code);
            continue;
        } else if entry.name.ends_with(", Last>") {
            match range_start.take() {
                Some(first) => CodeRange { first, last: entry.code },
                None => return Err(ClassifyError::UnpairedRangeMarker { code: entry.code }),
            }
        } else {
            CodeRange::point(entry.code)
        };
        range.check()?;
        let name: Rc<str> = Rc::from(entry.name.as_str());
        for cp in range.codepoints() {
            let draft = &mut drafts[cp as usize];
            draft.category = category;
            draft.name = Some(Rc::clone(&name));
        }
    }
    Ok(())
}

fn apply_widths(drafts: &mut [Draft], runs: &[PropertyRun]) -> Result<(), ClassifyError> {
    for run in runs {
        let width = match run.value.as_str() {
            "NP" => Width::Zero,
            "A" | "H" | "N" | "Na" => Width::Narrow,
            "F" | "W" => Width::Wide,
            _ => {
                return Err(ClassifyError::MissingProperty {
                    property: "East_Asian_Width",
                    value: run.value.clone(),
                    first: run.range.first,
                    last: run.range.last,
                })
            }
        };
        run.range.check()?;
        for cp in run.range.codepoints() {
            drafts[cp as usize].width = width;
        }
    }
    Ok(())
}

fn apply_breaks(drafts: &mut [Draft], runs: &[PropertyRun]) -> Result<(), ClassifyError> {
    for run in runs {
        let class = match BreakClass::from_name(&run.value) {
            Some(class) => class,
            None => {
                return Err(ClassifyError::MissingProperty {
                    property: "Grapheme_Cluster_Break",
                    value: run.value.clone(),
                    first: run.range.first,
                    last: run.range.last,
                })
            }
        };
        run.range.check()?;
        for cp in run.range.codepoints() {
            drafts[cp as usize].break_class = class;
        }
    }
    Ok(())
}

/// Emoji refinements. Only two of the emoji-data properties act on the
/// table; the rest are recognized no-ops rather than errors, their ranges
/// never touched.
fn apply_emoji(drafts: &mut [Draft], runs: &[PropertyRun]) -> Result<(), ClassifyError> {
    for run in runs {
        let class = match run.value.as_str() {
            "Extended_Pictographic" => BreakClass::ExtendedPictographic,
            "Emoji_Modifier_Base" => BreakClass::Extend,
            _ => continue,
        };
        run.range.check()?;
        for cp in run.range.codepoints() {
            drafts[cp as usize].break_class = class;
        }
    }
    Ok(())
}

/// Abbreviation aliases become the short alias; the first other alias of a
/// placeholder-named codepoint replaces its display name.
fn apply_aliases(drafts: &mut [Draft], aliases: &[AliasEntry]) -> Result<(), ClassifyError> {
    for entry in aliases {
        CodeRange::point(entry.code).check()?;
        let draft = &mut drafts[entry.code as usize];
        if entry.kind == "abbreviation" {
            draft.alias = Some(Rc::from(entry.alias.as_str()));
        } else if draft.name.as_deref().is_some_and(|name| name.starts_with('<')) {
            draft.name = Some(Rc::from(entry.alias.as_str()));
        }
    }
    Ok(())
}

fn apply_overrides(drafts: &mut [Draft], overrides: &Overrides) {
    for entry in overrides.entries() {
        // Overrides are caller-constructible, so clamp instead of trusting
        // the range to stay inside the Unicode space.
        let last = entry.range.last.min(MAX_CODEPOINT);
        for cp in entry.range.first..=last {
            let draft = &mut drafts[cp as usize];
            if let Some(width) = entry.width {
                draft.width = width;
            }
            if let Some(category) = entry.category {
                draft.category = category;
            }
            if let Some(break_class) = entry.break_class {
                draft.break_class = break_class;
            }
        }
    }
}

/// Force zero width on the non-printable categories, except Prepend
/// codepoints, which stay the narrow anchor of their cluster.
fn apply_nonprintable(drafts: &mut [Draft]) {
    for draft in drafts.iter_mut() {
        if CategorySet::ZERO_WIDTH.has(draft.category) && draft.break_class != BreakClass::Prepend
        {
            draft.width = Width::Zero;
        }
    }
}

/// Commands: C0, C1, and the paragraph separator.
fn is_command_code(cp: u32) -> bool {
    matches!(cp, 0x00..=0x1F | 0x7F..=0x9F | 0x2029)
}

/// Carve-out: ZWJ and the TAG block stay inside grapheme clusters and are
/// never indexed as controls.
fn is_exempt(cp: u32) -> bool {
    cp == 0x200D || matches!(cp, 0xE0000..=0xE007F)
}

/// Two-pass control indexing: collect the control set, split it into the
/// command and format bands, then assign ascending indices per band in
/// codepoint order.
fn index_controls(drafts: &mut [Draft]) -> Vec<ControlInfo> {
    let mut commands = Vec::new();
    let mut formats = Vec::new();
    for (cp, draft) in drafts.iter().enumerate() {
        let cp = cp as u32;
        if !CategorySet::CONTROLS.has(draft.category)
            || is_exempt(cp)
            || draft.break_class == BreakClass::Prepend
        {
            continue;
        }
        if is_command_code(cp) {
            commands.push(cp);
        } else {
            formats.push(cp);
        }
    }

    // is_command_code admits 66 codes; only the format band could outgrow
    // its u16 index.
    assert!(formats.len() <= u16::MAX as usize + 1, "format index overflow");

    let mut roster = Vec::with_capacity(commands.len() + formats.len());
    for (index, &cp) in commands.iter().enumerate() {
        roster.push(assign(drafts, cp, Control::Command(index as u16)));
    }
    for (index, &cp) in formats.iter().enumerate() {
        roster.push(assign(drafts, cp, Control::Format(index as u16)));
    }
    roster
}

fn assign(drafts: &mut [Draft], cp: u32, control: Control) -> ControlInfo {
    let draft = &mut drafts[cp as usize];
    draft.control = control;
    let name = draft
        .alias
        .as_deref()
        .or(draft.name.as_deref())
        .unwrap_or("")
        .to_string();
    ControlInfo { code: cp, control, name }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaks(range: &str, value: &str) -> PropertyRun {
        PropertyRun {
            range: CodeRange::parse(range).unwrap(),
            value: value.to_string(),
        }
    }

    fn entry(code: u32, name: &str, category: &str) -> CharEntry {
        CharEntry {
            code,
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn empty_sources_yield_an_invisible_space() {
        // Nothing assigned means general category Cn everywhere, and the
        // non-printable stage strips the width of every codepoint.
        let invisible = CodepointRecord {
            width: Width::Zero,
            ..CodepointRecord::DEFAULT
        };
        let classification = classify(&Sources::default(), &Overrides::none()).unwrap();
        assert_eq!(classification.records().len(), UNICODE_SPACE);
        assert_eq!(classification.record(0), invisible);
        assert_eq!(classification.record(MAX_CODEPOINT), invisible);
        // Out of range is the accessor's default, not a table entry.
        assert_eq!(classification.record(MAX_CODEPOINT + 1), CodepointRecord::DEFAULT);
        assert!(classification.controls().is_empty());
    }

    #[test]
    fn width_tags_map() {
        let mut sources = Sources::default();
        sources.unicode_data.push(entry(0x20A9, "WON SIGN", "Sc"));
        sources.unicode_data.push(entry(0x1120, "HANGUL CHOSEONG PIEUP-CHIEUCH", "Lo"));
        sources.unicode_data.push(entry(0x3000, "IDEOGRAPHIC SPACE", "Zs"));
        sources.unicode_data.push(entry(0x2010, "HYPHEN", "Pd"));
        sources.east_asian_width.push(breaks("20A9", "H"));
        sources.east_asian_width.push(breaks("1100..115F", "W"));
        sources.east_asian_width.push(breaks("3000", "F"));
        sources.east_asian_width.push(breaks("2010", "A"));
        let classification = classify(&sources, &Overrides::none()).unwrap();
        assert_eq!(classification.record(0x20A9).width, Width::Narrow);
        assert_eq!(classification.record(0x1120).width, Width::Wide);
        assert_eq!(classification.record(0x3000).width, Width::Wide);
        assert_eq!(classification.record(0x2010).width, Width::Narrow);
    }

    #[test]
    fn unknown_width_tag_is_fatal() {
        let mut sources = Sources::default();
        sources.east_asian_width.push(breaks("41..5A", "Q"));
        let err = classify(&sources, &Overrides::none()).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::MissingProperty {
                property: "East_Asian_Width",
                value: "Q".to_string(),
                first: 0x41,
                last: 0x5A,
            }
        );
    }

    #[test]
    fn unknown_break_class_is_fatal() {
        let mut sources = Sources::default();
        sources.grapheme_breaks.push(breaks("600..605", "Prepended"));
        assert!(matches!(
            classify(&sources, &Overrides::none()).unwrap_err(),
            ClassifyError::MissingProperty {
                property: "Grapheme_Cluster_Break",
                ..
            }
        ));
    }

    #[test]
    fn unknown_category_is_fatal() {
        let mut sources = Sources::default();
        sources.unicode_data.push(entry(0x41, "LATIN CAPITAL LETTER A", "Xy"));
        assert!(matches!(
            classify(&sources, &Overrides::none()).unwrap_err(),
            ClassifyError::MissingProperty {
                property: "General_Category",
                ..
            }
        ));
    }

    #[test]
    fn hand_built_entries_past_the_space_are_rejected() {
        // The parsers cannot produce these codes, but the source structs
        // are plain fields and every stage indexes by codepoint.
        let past = CodeRange { first: 0x10_FFFE, last: 0x11_0000 };
        let rejected = ClassifyError::BadCodepoint {
            field: "110000".to_string(),
        };

        let mut sources = Sources::default();
        sources.unicode_data.push(entry(0x11_0000, "NOT A CODEPOINT", "Lu"));
        assert_eq!(classify(&sources, &Overrides::none()).unwrap_err(), rejected);

        let mut sources = Sources::default();
        sources.east_asian_width.push(PropertyRun { range: past, value: "W".to_string() });
        assert_eq!(classify(&sources, &Overrides::none()).unwrap_err(), rejected);

        let mut sources = Sources::default();
        sources.grapheme_breaks.push(PropertyRun { range: past, value: "Extend".to_string() });
        assert_eq!(classify(&sources, &Overrides::none()).unwrap_err(), rejected);

        let mut sources = Sources::default();
        sources.emoji.push(PropertyRun {
            range: past,
            value: "Extended_Pictographic".to_string(),
        });
        assert_eq!(classify(&sources, &Overrides::none()).unwrap_err(), rejected);

        let mut sources = Sources::default();
        sources.name_aliases.push(AliasEntry {
            code: 0x11_0000,
            alias: "NAC".to_string(),
            kind: "abbreviation".to_string(),
        });
        assert_eq!(classify(&sources, &Overrides::none()).unwrap_err(), rejected);

        // Emoji properties outside the acted-on pair stay no-ops, bad
        // range or not.
        let mut sources = Sources::default();
        sources.emoji.push(PropertyRun {
            range: past,
            value: "Emoji_Component".to_string(),
        });
        assert!(classify(&sources, &Overrides::none()).is_ok());
    }

    #[test]
    fn first_last_markers_merge() {
        let mut sources = Sources::default();
        sources.unicode_data.push(entry(0x4E00, "<CJK Ideograph, First>", "Lo"));
        sources.unicode_data.push(entry(0x9FFF, "<CJK Ideograph, Last>", "Lo"));
        sources.east_asian_width.push(breaks("4E00..9FFF", "W"));
        let classification = classify(&sources, &Overrides::none()).unwrap();
        // The middle of the merged range got the category, so the nonprintable
        // stage left its width alone (Lo is printable).
        assert_eq!(classification.record(0x6000).width, Width::Wide);
    }

    #[test]
    fn unpaired_last_marker_is_fatal() {
        let mut sources = Sources::default();
        sources.unicode_data.push(entry(0x9FFF, "<CJK Ideograph, Last>", "Lo"));
        assert_eq!(
            classify(&sources, &Overrides::none()).unwrap_err(),
            ClassifyError::UnpairedRangeMarker { code: 0x9FFF }
        );
    }

    #[test]
    fn emoji_refinements() {
        let mut sources = Sources::default();
        sources.grapheme_breaks.push(breaks("1F3FB..1F3FF", "Extend"));
        sources.emoji.push(breaks("1F600", "Extended_Pictographic"));
        sources.emoji.push(breaks("1F466", "Emoji_Modifier_Base"));
        // Unlisted emoji properties change nothing.
        sources.emoji.push(breaks("0023", "Emoji_Component"));
        let classification = classify(&sources, &Overrides::none()).unwrap();
        assert_eq!(
            classification.record(0x1F600).break_class,
            BreakClass::ExtendedPictographic
        );
        assert_eq!(classification.record(0x1F466).break_class, BreakClass::Extend);
        assert_eq!(classification.record(0x23).break_class, BreakClass::Other);
    }

    #[test]
    fn nonprintable_derivation_spares_prepend() {
        let mut sources = Sources::default();
        sources.unicode_data.push(entry(0x300, "COMBINING GRAVE ACCENT", "Mn"));
        sources.unicode_data.push(entry(0x600, "ARABIC NUMBER SIGN", "Cf"));
        sources.grapheme_breaks.push(breaks("300", "Extend"));
        sources.grapheme_breaks.push(breaks("600", "Prepend"));
        let classification = classify(&sources, &Overrides::none()).unwrap();
        assert_eq!(classification.record(0x300).width, Width::Zero);
        assert_eq!(classification.record(0x600).width, Width::Narrow);
    }

    #[test]
    fn override_wins_over_every_source() {
        let mut sources = Sources::default();
        sources.unicode_data.push(entry(0x200B, "ZERO WIDTH SPACE", "Zs"));
        sources.east_asian_width.push(breaks("200B", "N"));
        sources.grapheme_breaks.push(breaks("200B", "Other"));
        let classification = classify(&sources, &Overrides::default()).unwrap();
        let record = classification.record(0x200B);
        assert_eq!(record.width, Width::Zero);
        assert_eq!(record.break_class, BreakClass::Extend);
        // Mn from the override keeps it out of the control roster.
        assert_eq!(record.control, Control::NonControl);
    }

    #[test]
    fn default_overrides_cover_the_direct_input_page() {
        let classification = classify(&Sources::default(), &Overrides::default()).unwrap();
        let record = classification.record(0xD0123);
        assert_eq!(record.width, Width::Zero);
        assert_eq!(record.break_class, BreakClass::Extend);
        // The page ends at U+D0FFF.
        assert_eq!(classification.record(0xD1000).break_class, BreakClass::Other);
    }

    #[test]
    fn control_bands_and_exemptions() {
        let mut sources = Sources::default();
        for cp in 0x00..=0x1F {
            sources.unicode_data.push(entry(cp, "<control>", "Cc"));
        }
        for cp in 0x7F..=0x9F {
            sources.unicode_data.push(entry(cp, "<control>", "Cc"));
        }
        sources.unicode_data.push(entry(0x2028, "LINE SEPARATOR", "Zl"));
        sources.unicode_data.push(entry(0x2029, "PARAGRAPH SEPARATOR", "Zp"));
        sources.unicode_data.push(entry(0xAD, "SOFT HYPHEN", "Cf"));
        sources.unicode_data.push(entry(0x600, "ARABIC NUMBER SIGN", "Cf"));
        sources.unicode_data.push(entry(0x200D, "ZERO WIDTH JOINER", "Cf"));
        sources.unicode_data.push(entry(0xE0001, "LANGUAGE TAG", "Cf"));
        sources.grapheme_breaks.push(breaks("600", "Prepend"));
        let classification = classify(&sources, &Overrides::none()).unwrap();

        // 0x00..0x1F and 0x7F..0x9F are commands, then 0x2029.
        assert_eq!(classification.record(0x00).control, Control::Command(0));
        assert_eq!(classification.record(0x1F).control, Control::Command(31));
        assert_eq!(classification.record(0x7F).control, Control::Command(32));
        assert_eq!(classification.record(0x9F).control, Control::Command(64));
        assert_eq!(classification.record(0x2029).control, Control::Command(65));

        // Formats in ascending codepoint order: SHY before LINE SEPARATOR.
        assert_eq!(classification.record(0xAD).control, Control::Format(0));
        assert_eq!(classification.record(0x2028).control, Control::Format(1));

        // Carve-outs and Prepend stay unindexed.
        assert_eq!(classification.record(0x200D).control, Control::NonControl);
        assert_eq!(classification.record(0xE0001).control, Control::NonControl);
        assert_eq!(classification.record(0x600).control, Control::NonControl);

        // Roster mirrors the same order.
        let controls = classification.controls();
        assert_eq!(controls.len(), 66 + 2);
        assert_eq!(controls[0].code, 0x00);
        assert_eq!(controls[65].code, 0x2029);
        assert_eq!(controls[66].code, 0xAD);
        assert_eq!(controls[66].control, Control::Format(0));
        assert!(controls.windows(2).all(|pair| pair[0].control < pair[1].control));
    }

    #[test]
    #[should_panic(expected = "format index overflow")]
    fn format_band_cannot_outgrow_its_index() {
        // 0x10001 format controls would need index 0x10000, one past u16.
        let mut sources = Sources::default();
        for code in 0x2_0000..0x3_0001 {
            sources.unicode_data.push(entry(code, "<reserved>", "Cf"));
        }
        let _ = classify(&sources, &Overrides::none());
    }

    #[test]
    fn roster_names_prefer_abbreviations() {
        let mut sources = Sources::default();
        sources.unicode_data.push(entry(0x00, "<control>", "Cc"));
        sources.unicode_data.push(entry(0xAD, "SOFT HYPHEN", "Cf"));
        sources.name_aliases.push(AliasEntry {
            code: 0x00,
            alias: "NULL".to_string(),
            kind: "control".to_string(),
        });
        sources.name_aliases.push(AliasEntry {
            code: 0x00,
            alias: "NUL".to_string(),
            kind: "abbreviation".to_string(),
        });
        sources.name_aliases.push(AliasEntry {
            code: 0xAD,
            alias: "SHY".to_string(),
            kind: "abbreviation".to_string(),
        });
        let classification = classify(&sources, &Overrides::none()).unwrap();
        let controls = classification.controls();
        assert_eq!(controls[0].code, 0x00);
        assert_eq!(controls[0].name, "NUL");
        let shy = controls.iter().find(|info| info.code == 0xAD).unwrap();
        assert_eq!(shy.name, "SHY");
    }

    #[test]
    fn placeholder_names_take_the_first_plain_alias() {
        let mut sources = Sources::default();
        sources.unicode_data.push(entry(0x0A, "<control>", "Cc"));
        for alias in ["LINE FEED", "NEW LINE", "END OF LINE"] {
            sources.name_aliases.push(AliasEntry {
                code: 0x0A,
                alias: alias.to_string(),
                kind: "control".to_string(),
            });
        }
        let classification = classify(&sources, &Overrides::none()).unwrap();
        let lf = classification
            .controls()
            .iter()
            .find(|info| info.code == 0x0A)
            .unwrap();
        // No abbreviation listed, so the resolved display name shows, and
        // only the first control alias replaced the placeholder.
        assert_eq!(lf.name, "LINE FEED");
    }
}

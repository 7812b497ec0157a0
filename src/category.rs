// category.rs - General categories and the category sets the pipeline tests.

use bitflags::bitflags;

/// General category of a codepoint, by the standard two-letter abbreviation.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Uppercase letter.
    Lu = 0,
    /// Lowercase letter.
    Ll = 1,
    /// Titlecase letter.
    Lt = 2,
    /// Modifier letter.
    Lm = 3,
    /// Other letter, including syllables and ideographs.
    Lo = 4,
    /// Nonspacing combining mark.
    Mn = 5,
    /// Spacing combining mark.
    Mc = 6,
    /// Enclosing combining mark.
    Me = 7,
    /// Decimal digit.
    Nd = 8,
    /// Letterlike numeric character.
    Nl = 9,
    /// Numeric character of other type.
    No = 10,
    /// Connecting punctuation.
    Pc = 11,
    /// Dash or hyphen punctuation.
    Pd = 12,
    /// Opening punctuation.
    Ps = 13,
    /// Closing punctuation.
    Pe = 14,
    /// Initial quotation mark.
    Pi = 15,
    /// Final quotation mark.
    Pf = 16,
    /// Punctuation of other type.
    Po = 17,
    /// Mathematical symbol.
    Sm = 18,
    /// Currency sign.
    Sc = 19,
    /// Modifier symbol.
    Sk = 20,
    /// Symbol of other type.
    So = 21,
    /// Space separator.
    Zs = 22,
    /// LINE SEPARATOR U+2028.
    Zl = 23,
    /// PARAGRAPH SEPARATOR U+2029.
    Zp = 24,
    /// C0 or C1 control code.
    Cc = 25,
    /// Format control character.
    Cf = 26,
    /// Surrogate code point.
    Cs = 27,
    /// Private-use character.
    Co = 28,
    /// Reserved unassigned code point or noncharacter.
    #[default]
    Cn = 29,
}

impl Category {
    /// Map a two-letter abbreviation from the Unicode data files.
    pub fn from_abbr(abbr: &str) -> Option<Category> {
        Some(match abbr {
            "Lu" => Category::Lu,
            "Ll" => Category::Ll,
            "Lt" => Category::Lt,
            "Lm" => Category::Lm,
            "Lo" => Category::Lo,
            "Mn" => Category::Mn,
            "Mc" => Category::Mc,
            "Me" => Category::Me,
            "Nd" => Category::Nd,
            "Nl" => Category::Nl,
            "No" => Category::No,
            "Pc" => Category::Pc,
            "Pd" => Category::Pd,
            "Ps" => Category::Ps,
            "Pe" => Category::Pe,
            "Pi" => Category::Pi,
            "Pf" => Category::Pf,
            "Po" => Category::Po,
            "Sm" => Category::Sm,
            "Sc" => Category::Sc,
            "Sk" => Category::Sk,
            "So" => Category::So,
            "Zs" => Category::Zs,
            "Zl" => Category::Zl,
            "Zp" => Category::Zp,
            "Cc" => Category::Cc,
            "Cf" => Category::Cf,
            "Cs" => Category::Cs,
            "Co" => Category::Co,
            "Cn" => Category::Cn,
            _ => return None,
        })
    }

    /// The two-letter abbreviation.
    pub const fn abbr(self) -> &'static str {
        match self {
            Category::Lu => "Lu",
            Category::Ll => "Ll",
            Category::Lt => "Lt",
            Category::Lm => "Lm",
            Category::Lo => "Lo",
            Category::Mn => "Mn",
            Category::Mc => "Mc",
            Category::Me => "Me",
            Category::Nd => "Nd",
            Category::Nl => "Nl",
            Category::No => "No",
            Category::Pc => "Pc",
            Category::Pd => "Pd",
            Category::Ps => "Ps",
            Category::Pe => "Pe",
            Category::Pi => "Pi",
            Category::Pf => "Pf",
            Category::Po => "Po",
            Category::Sm => "Sm",
            Category::Sc => "Sc",
            Category::Sk => "Sk",
            Category::So => "So",
            Category::Zs => "Zs",
            Category::Zl => "Zl",
            Category::Zp => "Zp",
            Category::Cc => "Cc",
            Category::Cf => "Cf",
            Category::Cs => "Cs",
            Category::Co => "Co",
            Category::Cn => "Cn",
        }
    }

    /// This category as a one-bit [`CategorySet`].
    pub const fn bit(self) -> CategorySet {
        CategorySet::from_bits_retain(1 << self as u32)
    }
}

bitflags! {
    /// Set of general categories, one bit per category.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CategorySet: u32 {
        const LU = 1 << Category::Lu as u32;
        const LL = 1 << Category::Ll as u32;
        const LT = 1 << Category::Lt as u32;
        const LM = 1 << Category::Lm as u32;
        const LO = 1 << Category::Lo as u32;
        const MN = 1 << Category::Mn as u32;
        const MC = 1 << Category::Mc as u32;
        const ME = 1 << Category::Me as u32;
        const ND = 1 << Category::Nd as u32;
        const NL = 1 << Category::Nl as u32;
        const NO = 1 << Category::No as u32;
        const PC = 1 << Category::Pc as u32;
        const PD = 1 << Category::Pd as u32;
        const PS = 1 << Category::Ps as u32;
        const PE = 1 << Category::Pe as u32;
        const PI = 1 << Category::Pi as u32;
        const PF = 1 << Category::Pf as u32;
        const PO = 1 << Category::Po as u32;
        const SM = 1 << Category::Sm as u32;
        const SC = 1 << Category::Sc as u32;
        const SK = 1 << Category::Sk as u32;
        const SO = 1 << Category::So as u32;
        const ZS = 1 << Category::Zs as u32;
        const ZL = 1 << Category::Zl as u32;
        const ZP = 1 << Category::Zp as u32;
        const CC = 1 << Category::Cc as u32;
        const CF = 1 << Category::Cf as u32;
        const CS = 1 << Category::Cs as u32;
        const CO = 1 << Category::Co as u32;
        const CN = 1 << Category::Cn as u32;

        /// Categories rendered zero-width unless the break class keeps them
        /// visible (Prepend).
        const ZERO_WIDTH = Self::CC.bits()
            | Self::CF.bits()
            | Self::CS.bits()
            | Self::CN.bits()
            | Self::ZL.bits()
            | Self::ZP.bits()
            | Self::MN.bits()
            | Self::MC.bits()
            | Self::ME.bits();

        /// Categories feeding the control index: commands and formats come
        /// out of this set.
        const CONTROLS = Self::CC.bits()
            | Self::CF.bits()
            | Self::ZL.bits()
            | Self::ZP.bits();
    }
}

impl CategorySet {
    /// Membership test for one category.
    pub const fn has(self, category: Category) -> bool {
        self.contains(category.bit())
    }
}
